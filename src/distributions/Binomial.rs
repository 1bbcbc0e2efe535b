//! # Binomial distribution
//!
//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is a discrete probability distribution that models the number of successes
//! among `n` independent [Bernoulli](https://en.wikipedia.org/wiki/Bernoulli_distribution)
//! trials, each with success probability `p`.
//!
//! The pmf uses the direct formula (with
//! [binomial_coefficient](crate::euclid::binomial_coefficient)) up to
//! `n = 170` and switches to logarithmic space (with
//! [ln_gamma](crate::euclid::ln_gamma)) beyond that, so that large `n` does
//! not overflow the binomial coefficient.
//!

use crate::configuration;
use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;
use crate::euclid;

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
    support: Support,
}

impl Binomial {
    /// Create a [Binomial] distribution with `n` trials and success
    /// probability `p`.
    ///
    ///  - `n` must be at least `1`
    ///  - `p` must be a probability: inside `[0.0, 1.0]` (no NaNs)
    ///
    /// Otherwise a [BeanStatError::InvalidParameter] is returned.
    pub fn new(n: u64, p: f64) -> Result<Binomial, BeanStatError> {
        if n == 0 || p.is_nan() || p < 0.0 || 1.0 < p {
            return Err(BeanStatError::InvalidParameter);
        }

        #[allow(clippy::cast_possible_wrap)]
        return Ok(Binomial {
            n,
            p,
            support: Support::IntegerRange(0, n as i64),
        });
    }

    /// Returns the number of trials `n`.
    #[must_use]
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }

    /// Returns the success probability `p`.
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl Distribution for Binomial {
    /// The pmf: `C(n, x) * p^x * (1-p)^(n-x)` at the integers inside
    /// `[0, n]` (integer-alignment checked within the fine tolerance),
    /// `0.0` anywhere else.
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() || !x.is_finite() {
            return 0.0;
        }

        let k: f64 = x.round();
        if configuration::FINE_TOLERANCE < (x - k).abs() {
            // not an integer
            return 0.0;
        }
        if k < 0.0 || (self.n as f64) < k {
            return 0.0;
        }

        // degenerate parameters: all the mass sits at one end
        if self.p == 0.0 {
            return if k == 0.0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n as f64 { 1.0 } else { 0.0 };
        }

        let n: f64 = self.n as f64;

        // the binomial coefficient overflows a f64 past n = 170 or so; use
        // the direct formula while it is safe and logarithms beyond
        if self.n <= 170 {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let coefficient: f64 = euclid::binomial_coefficient(self.n, k as u64);
            return coefficient * self.p.powf(k) * (1.0 - self.p).powf(n - k);
        }

        let log_pmf: f64 = euclid::ln_gamma(n + 1.0)
            - euclid::ln_gamma(k + 1.0)
            - euclid::ln_gamma(n - k + 1.0)
            + k * self.p.ln()
            + (n - k) * (1.0 - self.p).ln();
        return log_pmf.exp();
    }

    /// The cumulative sum of the pmf over the integers `0..=floor(x)`.
    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 || x.is_nan() {
            return 0.0;
        }
        if (self.n as f64) <= x {
            return 1.0;
        }

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let up_to: u64 = x.floor() as u64;

        let mut acc: f64 = 0.0;
        for k in 0..=up_to {
            acc += self.pdf(k as f64);
        }
        return acc.min(1.0);
    }

    /// Inverted by scanning the integers ([Distribution::quantile_by_scan]).
    /// The support is bounded, so every `p` in `[0.0, 1.0]` terminates.
    fn quantile(&self, p: f64) -> Result<f64, BeanStatError> {
        return self.quantile_by_scan(p);
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn is_discrete(&self) -> bool {
        return true;
    }

    fn mean(&self) -> f64 {
        return (self.n as f64) * self.p;
    }

    fn variance(&self) -> f64 {
        return (self.n as f64) * self.p * (1.0 - self.p);
    }
}
