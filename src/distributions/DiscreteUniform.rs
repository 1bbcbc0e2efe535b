//! # Discrete Uniform distribution
//!
//! The [Discrete Uniform distribution](https://en.wikipedia.org/wiki/Discrete_uniform_distribution)
//! assigns the same probability mass to each point of an evenly spaced,
//! bounded grid: `min, min + step, min + 2*step, ..., max`.
//!
//! Evaluating the pmf at an arbitrary real `x` requires deciding if `x` lies
//! on the grid, wich is delicate with floating point. The alignment check
//! compares `x` against the nearest grid point after rounding both to a
//! number of decimals selected by a [Precision] value: 9 decimals in the
//! deafult mode or 5 in the coarse "safe" one, wich is absolutely safe from
//! floating point noise but can not tell apart grid points closer than
//! `10^-5`.
//!

use crate::configuration::Precision;
use crate::distribution_trait::Distribution;
use crate::domain::Support;
use crate::errors::BeanStatError;
use crate::euclid;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniform {
    min: f64,
    max: f64,
    step: f64,
    /// number of grid points, `(max - min) / step + 1`
    num_values: u64,
    support: Support,
}

impl DiscreteUniform {
    /// Create a [DiscreteUniform] distribution over the grid
    /// `min, min + step, ..., max`.
    ///
    ///  - `min`, `max` and `step` must be finite (No `+-inf` or NaNs)
    ///  - `min < max` (stricly)
    ///  - `step` must be stricly greater than `0.0`
    ///  - `(max - min)` must be an exact integer multiple of `step`
    ///     (within the fine tolerance)
    ///
    /// Otherwise a [BeanStatError::InvalidParameter] is returned.
    pub fn new(min: f64, max: f64, step: f64) -> Result<DiscreteUniform, BeanStatError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(BeanStatError::InvalidParameter);
        }
        if max <= min || step <= 0.0 {
            return Err(BeanStatError::InvalidParameter);
        }

        let steps: f64 = (max - min) / step;
        if crate::configuration::FINE_TOLERANCE < (steps - steps.round()).abs() {
            // the grid would not land exactly on max
            return Err(BeanStatError::InvalidParameter);
        }

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let num_values: u64 = steps.round() as u64 + 1;

        return Ok(DiscreteUniform {
            min,
            max,
            step,
            num_values,
            support: Support::SteppedRange { min, max, step },
        });
    }

    /// Returns the number of grid points.
    #[must_use]
    pub const fn get_num_values(&self) -> u64 {
        return self.num_values;
    }

    /// Returns the step between consecutive grid points.
    #[must_use]
    pub const fn get_step(&self) -> f64 {
        return self.step;
    }
}

impl Distribution for DiscreteUniform {
    /// The pmf: `1 / num_values` at the grid points (alignment checked with
    /// the deafult fine tolerance), `0.0` anywhere else.
    fn pdf(&self, x: f64) -> f64 {
        return self.pdf_at(x, Precision::Default);
    }

    /// The alignment check rounds `x` and the nearest grid point to
    /// [Precision::alignment_decimals] decimal places and compares them:
    /// 9 decimals in the deafult mode, 5 in the safe one.
    fn pdf_at(&self, x: f64, precision: Precision) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let k: f64 = ((x - self.min) / self.step).round();
        if k < 0.0 || (self.num_values as f64) <= k {
            return 0.0;
        }

        let decimals: i32 = precision.alignment_decimals();
        let nearest_grid_point: f64 = self.min + k * self.step;
        if euclid::round_to_decimals(x, decimals)
            != euclid::round_to_decimals(nearest_grid_point, decimals)
        {
            // off-grid
            return 0.0;
        }

        return 1.0 / (self.num_values as f64);
    }

    fn cdf(&self, x: f64) -> f64 {
        return self.cdf_at(x, Precision::Default);
    }

    /// Clamps to `0.0` below `min` and to `1.0` at or above `max`, otherwise
    /// the number of grid points at or below `x` times the uniform mass.
    fn cdf_at(&self, x: f64, precision: Precision) -> f64 {
        if x < self.min || x.is_nan() {
            return 0.0;
        }
        if self.max <= x {
            return 1.0;
        }

        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let count: u64 = ((x - self.min) / self.step + precision.tolerance()).floor() as u64 + 1;
        return (count as f64) / (self.num_values as f64);
    }

    /// Inverted by scanning the grid ([Distribution::quantile_by_scan]).
    /// The support is bounded, so every `p` in `[0.0, 1.0]` terminates
    /// (`p == 1.0` returns `max` directly).
    fn quantile(&self, p: f64) -> Result<f64, BeanStatError> {
        return self.quantile_by_scan(p);
    }

    fn get_support(&self) -> &Support {
        return &self.support;
    }

    fn is_discrete(&self) -> bool {
        return true;
    }

    fn is_piecewise(&self) -> bool {
        return true;
    }

    fn mean(&self) -> f64 {
        return 0.5 * (self.min + self.max);
    }

    fn variance(&self) -> f64 {
        // step^2 * (n^2 - 1) / 12
        let n: f64 = self.num_values as f64;
        return self.step * self.step * (n * n - 1.0) / 12.0;
    }
}
