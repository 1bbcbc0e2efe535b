//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous probability distribution that models the waiting time
//! between events of a [Poisson process](https://en.wikipedia.org/wiki/Poisson_point_process).
//! It is the continuous analogous of the
//! [Geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! and it is caracterized by being
//! [memoryless](https://en.wikipedia.org/wiki/Memorylessness).
//!

use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;

#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
    support: Support,
}

impl Exponential {
    /// Create an [Exponential] distribution with the given rate `lambda`.
    ///
    ///  - `lambda` must be finite (No `+-inf` or NaNs)
    ///  - `lambda` must be stricly greater than `0.0`.
    ///
    /// Otherwise a [BeanStatError::InvalidParameter] is returned.
    pub fn new(lambda: f64) -> Result<Exponential, BeanStatError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(BeanStatError::InvalidParameter);
        }

        return Ok(Exponential {
            lambda,
            support: Support::From(0.0),
        });
    }

    /// Returns the rate parameter `lambda`.
    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 || x.is_nan() {
            return 0.0;
        }
        // also covers x = inf ((-inf).exp() = 0.0)
        return 1.0 - (-self.lambda * x).exp();
    }

    fn quantile(&self, p: f64) -> Result<f64, BeanStatError> {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return Err(BeanStatError::InvalidProbability);
        }

        // p = 1.0 maps to +inf (ln(0.0) = -inf)
        return Ok(-(1.0 - p).ln() / self.lambda);
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn mean(&self) -> f64 {
        return 1.0 / self.lambda;
    }

    fn variance(&self) -> f64 {
        return 1.0 / (self.lambda * self.lambda);
    }
}
