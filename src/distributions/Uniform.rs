//! # (Continuous) Uniform distribution
//!
//! The continuous [Uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! assigns the same probability density to every point in the interval
//! `[a, b]`. It is the distribution of maximum ignorance on a bounded
//! interval, and the one that the raw random number generators produce
//! (on `[0, 1)`).
//!
//! For the stepped/discrete counterpart see
//! [DiscreteUniform](crate::distributions::DiscreteUniform).
//!

use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
    support: Support,
}

impl Uniform {
    /// Create a [Uniform] distribution over the interval `[a, b]`.
    ///
    ///  - Both `a` and `b` must be finite (No `+-inf` or NaNs)
    ///  - `a < b` (stricly)
    ///
    /// Otherwise a [BeanStatError::InvalidParameter] is returned.
    pub fn new(a: f64, b: f64) -> Result<Uniform, BeanStatError> {
        if !a.is_finite() || !b.is_finite() || b <= a {
            return Err(BeanStatError::InvalidParameter);
        }

        return Ok(Uniform {
            a,
            b,
            support: Support::Range(a, b),
        });
    }

    /// Returns the bounds `(a, b)` of the interval.
    #[must_use]
    pub const fn get_bounds(&self) -> (f64, f64) {
        return (self.a, self.b);
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || self.b < x || x.is_nan() {
            return 0.0;
        }
        return 1.0 / (self.b - self.a);
    }

    /// The cdf is a clamped linear ramp: `0.0` below `a`, `1.0` at or above
    /// `b`, linear in between.
    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a || x.is_nan() {
            return 0.0;
        }
        if self.b <= x {
            return 1.0;
        }
        return (x - self.a) / (self.b - self.a);
    }

    fn quantile(&self, p: f64) -> Result<f64, BeanStatError> {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return Err(BeanStatError::InvalidProbability);
        }

        return Ok(self.a + p * (self.b - self.a));
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    // bounded support
    fn is_piecewise(&self) -> bool {
        return true;
    }

    fn mean(&self) -> f64 {
        return 0.5 * (self.a + self.b);
    }

    fn variance(&self) -> f64 {
        let width: f64 = self.b - self.a;
        return width * width / 12.0;
    }
}
