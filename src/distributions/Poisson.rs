//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete probability distribution that models the number of events
//! in a fixed interval of time, if the events occur independently at a
//! constant average rate `lambda`.
//!
//! The pmf is evaluated in logarithmic space
//! (`exp(x*ln(lambda) - lambda - ln(x!))`) to avoid overflowing the factorial
//! for large `x`. The cdf goes trough the regularized incomplete gamma
//! function instead of summing pmf terms, so it costs the same for `x = 3`
//! and for `x = 10^12`.
//!

use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;
use crate::euclid;

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
    support: Support,
}

impl Poisson {
    /// Create a [Poisson] distribution with the given rate `lambda`.
    ///
    ///  - `lambda` must be finite (No `+-inf` or NaNs)
    ///  - `lambda` must be stricly greater than `0.0`.
    ///
    /// Otherwise a [BeanStatError::InvalidParameter] is returned.
    pub fn new(lambda: f64) -> Result<Poisson, BeanStatError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(BeanStatError::InvalidParameter);
        }

        return Ok(Poisson {
            lambda,
            support: Support::IntegersFrom(0),
        });
    }

    /// Returns the rate parameter `lambda`.
    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }
}

impl Distribution for Poisson {
    /// The pmf of the Poisson: `lambda^x * e^-lambda / x!` for the
    /// non-negative integers `x` (including `pmf(0) = e^-lambda`), `0.0`
    /// anywhere else.
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || !x.is_finite() || x.fract() != 0.0 {
            return 0.0;
        }

        let log_pmf: f64 = x * self.lambda.ln() - self.lambda - euclid::ln_factorial(x);
        return log_pmf.exp();
    }

    /// The partial sum of the pmf over the integers `0..=floor(x)`.
    ///
    /// Evaluated in closed form trough the identity
    /// `P(X <= n) = Q(n + 1, lambda)`, where `Q` is the regularized **upper**
    /// incomplete gamma function. Summing the pmf terms directly would take
    /// `floor(x)` iterations (unbounded for large valid `x`) and its first
    /// term `e^-lambda` underflows to `0.0` for `lambda` above roughly `700`;
    /// the gamma form has neither problem.
    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 || x.is_nan() {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }

        return 1.0 - euclid::lower_incomplete_gamma_reg(x.floor() + 1.0, self.lambda);
    }

    /// No closed form inverse exists: the cdf staircase is scanned
    /// ([Distribution::quantile_by_scan]). `p == 1.0` is rejected because
    /// the support is unbounded above.
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
        return self.lambda;
    }

    fn variance(&self) -> f64 {
        return self.lambda;
    }
}
