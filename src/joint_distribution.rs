//! This script contains the [JointDistribution]: a bivariate distribution
//! built from 2 marginal distributions under the assumption of independence.

use crate::distribution_trait::Distribution;
use crate::errors::BeanStatError;
use crate::euclid;
use crate::sampler::RandomSource;

/// A bivariate joint distribution of 2 **independent** marginals.
///
/// The joint density is the product of the marginal densities divided by a
/// normalizing constant, computed once at construction, so that the double
/// integral over the rectangular product support equals `1.0`.
///
/// Since the marginals are valid distributions, their mass over their own
/// support is already `1.0` and the normalizing constant is too. It is still
/// computed from the cdfs (instead of assumed) so that a marginal with a
/// slightly unnormalized numerical cdf does not silently skew the joint.
///
/// The joint owns its marginals and never mutates them.
pub struct JointDistribution {
    dist_x: Box<dyn Distribution>,
    dist_y: Box<dyn Distribution>,
    /// `mass(X) * mass(Y)`, divides the product density
    normalizing_constant: f64,
}

/// The total probability mass of a marginal over its support, from its cdf.
///
/// For the discrete distributions the cdf at the lower bound already includes
/// the mass **at** the bound, so the subtracted term is the cdf one step below.
fn support_mass(dist: &dyn Distribution) -> f64 {
    let (min, max): (f64, f64) = dist.get_support().get_bounds();
    let step: f64 = dist.get_support().step();

    let upper: f64 = if max == f64::INFINITY { 1.0 } else { dist.cdf(max) };
    let lower: f64 = if min == f64::NEG_INFINITY {
        0.0
    } else if dist.is_discrete() {
        dist.cdf(min - step)
    } else {
        dist.cdf(min)
    };

    return upper - lower;
}

impl JointDistribution {
    /// Create a [JointDistribution] from the 2 given marginals, assuming
    /// they are independent.
    ///
    /// Returns a [BeanStatError::NumericalError] if the normalizing constant
    /// (the product of the marginal masses) is not a stricly positive finite
    /// number.
    pub fn new(
        dist_x: Box<dyn Distribution>,
        dist_y: Box<dyn Distribution>,
    ) -> Result<JointDistribution, BeanStatError> {
        let normalizing_constant: f64 = support_mass(dist_x.as_ref()) * support_mass(dist_y.as_ref());

        if !normalizing_constant.is_finite() || normalizing_constant <= 0.0 {
            return Err(BeanStatError::NumericalError);
        }

        return Ok(JointDistribution {
            dist_x,
            dist_y,
            normalizing_constant,
        });
    }

    /// The joint density at the point `(x, y)`.
    ///
    /// Outside the rectangular product support it is `0.0` (each marginal
    /// pdf already returns `0.0` outside its own support).
    #[must_use]
    pub fn pdf(&self, x: f64, y: f64) -> f64 {
        return self.dist_x.pdf(x) * self.dist_y.pdf(y) / self.normalizing_constant;
    }

    /// Returns a reference to the marginal of the first coordinate.
    #[must_use]
    pub fn get_marginal_x(&self) -> &dyn Distribution {
        return self.dist_x.as_ref();
    }

    /// Returns a reference to the marginal of the second coordinate.
    #[must_use]
    pub fn get_marginal_y(&self) -> &dyn Distribution {
        return self.dist_y.as_ref();
    }

    /// Draws one `(x, y)` pair using the given [RandomSource]. The 2
    /// coordinates are sampled independently (the `x` draw first).
    pub fn sample_with(&self, rng: &mut RandomSource) -> (f64, f64) {
        let x: f64 = self.dist_x.sample_with(rng);
        let y: f64 = self.dist_y.sample_with(rng);
        return (x, y);
    }

    /// Draws one `(x, y)` pair. Seeded the same way as
    /// [Distribution::sample]: a fresh generator if `seed` is given, the
    /// shared one otherwise.
    #[must_use]
    pub fn sample(&self, seed: Option<u64>) -> (f64, f64) {
        let mut rng: RandomSource = RandomSource::from_seed(seed);
        return self.sample_with(&mut rng);
    }

    /// Draws `count` independent `(x, y)` pairs. With a `seed`, a single
    /// generator is seeded once and reused for the whole batch.
    #[must_use]
    pub fn sample_multiple(&self, count: usize, seed: Option<u64>) -> Vec<(f64, f64)> {
        let mut rng: RandomSource = RandomSource::from_seed(seed);

        let mut ret: Vec<(f64, f64)> = Vec::with_capacity(count);
        for _i in 0..count {
            ret.push(self.sample_with(&mut rng));
        }
        return ret;
    }

    /// Evaluates the joint density on a rectangular grid, ready to be handed
    /// to a plotting adapter as a heatmap.
    ///
    /// The grid covers `[x_min, x_max] x [y_min, y_max]` with
    /// `resolution + 1` points per axis (both endpoints included).
    /// `grid.values[i][j]` is the density at `(grid.x_axis[i], grid.y_axis[j])`.
    #[must_use]
    pub fn pdf_grid(
        &self,
        x_range: (f64, f64),
        y_range: (f64, f64),
        resolution: usize,
    ) -> crate::plotting::HeatmapGrid {
        let x_axis: Vec<f64> = euclid::linspace(x_range.0, x_range.1, resolution + 1);
        let y_axis: Vec<f64> = euclid::linspace(y_range.0, y_range.1, resolution + 1);

        let mut values: Vec<Vec<f64>> = Vec::with_capacity(x_axis.len());
        for &x in &x_axis {
            let mut row: Vec<f64> = Vec::with_capacity(y_axis.len());
            for &y in &y_axis {
                row.push(self.pdf(x, y));
            }
            values.push(row);
        }

        return crate::plotting::HeatmapGrid {
            x_axis,
            y_axis,
            values,
        };
    }
}
