//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It has a key role in the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich says that the sum of `n` random variables of **any** distribution
//! will give a new random variable that is normally distributed as `n` grows
//! to infinity.
//!
//! It is parametrized here by the mean and the **variance** (not the standard
//! deviation). Use [Normal::standard] for the standard normal
//! (`mean = 0.0`, `variance = 1.0`).
//!

use std::f64::consts::PI;

use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;
use crate::euclid;

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mean: f64,
    variance: f64,
    standard_deviation: f64,
    support: Support,
}

impl Normal {
    /// Create a [Normal] distribution with the given `mean` and `variance`.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `variance` must be finite (No `+-inf` or NaNs)
    ///  - The `variance` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfilled, a
    /// [BeanStatError::InvalidParameter] is returned.
    pub fn new(mean: f64, variance: f64) -> Result<Normal, BeanStatError> {
        if !mean.is_finite() || !variance.is_finite() || variance <= 0.0 {
            return Err(BeanStatError::InvalidParameter);
        }

        return Ok(Normal {
            mean,
            variance,
            standard_deviation: variance.sqrt(),
            support: Support::Reals,
        });
    }

    /// Create a standard [Normal] distribution: `mean = 0.0` and
    /// `variance = 1.0`.
    #[must_use]
    pub const fn standard() -> Normal {
        return Normal {
            mean: 0.0,
            variance: 1.0,
            standard_deviation: 1.0,
            support: Support::Reals,
        };
    }

    /// Returns the standard deviation of the distribution (the square root
    /// of the variance parameter).
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z: f64 = (x - self.mean) / self.standard_deviation;
        let normalization: f64 = 1.0 / (self.standard_deviation * (2.0 * PI).sqrt());
        return normalization * (-0.5 * z * z).exp();
    }

    fn cdf(&self, x: f64) -> f64 {
        // erf handles the +-inf cases correctly (returns +-1.0)
        let z: f64 = (x - self.mean) / (self.standard_deviation * std::f64::consts::SQRT_2);
        return 0.5 * (1.0 + euclid::erf(z));
    }

    fn quantile(&self, p: f64) -> Result<f64, BeanStatError> {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return Err(BeanStatError::InvalidProbability);
        }

        // p = 0.0 and p = 1.0 map to -inf and +inf respectively trough erf_inv
        let q: f64 = euclid::erf_inv(2.0 * p - 1.0);
        return Ok(self.mean + self.standard_deviation * std::f64::consts::SQRT_2 * q);
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn mean(&self) -> f64 {
        return self.mean;
    }

    fn variance(&self) -> f64 {
        return self.variance;
    }
}
