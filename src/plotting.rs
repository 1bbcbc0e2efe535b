//! This script contains the data structures handed to an external plotting
//! adapter, and the scatter generator for linear regression demonstrations.
//!
//! This library does **not** render anything on its own: the curves
//! ([Distribution::cdf_curve] / [Distribution::pdf_curve]) are ordered
//! `(x, y)` sequences, the joint densities
//! ([pdf_grid](crate::joint_distribution::JointDistribution::pdf_grid)) are a
//! [HeatmapGrid], and whatever consumes them (a terminal plotter, a notebook,
//! a GUI) is an external collaborator.

use crate::distribution_trait::Distribution;
use crate::distributions::Normal::Normal;
use crate::errors::BeanStatError;
use crate::sampler::RandomSource;

/// A rectangular grid of density values plus its axis coordinates, for
/// heatmap rendering.
///
/// `values[i][j]` is the density at `(x_axis[i], y_axis[j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub x_axis: Vec<f64>,
    pub y_axis: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

/// Generates `count` points `(X, Y)` of a noisy linear relation
/// `Y = intercept + slope * X + eps`, where `X` is sampled from `dist` and
/// `eps ~ Normal(0, noise_variance)`. The points are ready to be handed to a
/// plotting adapter as a scatter.
///
/// `noise_variance` may be `0.0` for a noiseless (exact) relation, but must
/// not be negative, infinite or NaN.
///
/// With a `seed`, a single generator is seeded once and drives both the `X`
/// draws and the noise, so the whole scatter is reproducible.
///
/// ## Example
///
/// ```rust
/// use BeanStats::distributions::Uniform::Uniform;
/// use BeanStats::plotting::linear_regression_scatter;
///
/// let xs: Uniform = Uniform::new(0.0, 10.0).unwrap();
/// let points: Vec<(f64, f64)> = linear_regression_scatter()
///     .dist(&xs)
///     .intercept(2.0)
///     .slope(0.5)
///     .noise_variance(1.0)
///     .count(100)
///     .seed(42)
///     .call()
///     .unwrap();
///
/// assert_eq!(points.len(), 100);
/// ```
#[bon::builder]
pub fn linear_regression_scatter(
    dist: &dyn Distribution,
    #[builder(default)] intercept: f64,
    #[builder(default = 1.0)] slope: f64,
    #[builder(default = 1.0)] noise_variance: f64,
    #[builder(default = 50)] count: usize,
    seed: Option<u64>,
) -> Result<Vec<(f64, f64)>, BeanStatError> {
    if !intercept.is_finite() || !slope.is_finite() {
        return Err(BeanStatError::InvalidParameter);
    }
    if !noise_variance.is_finite() || noise_variance < 0.0 {
        return Err(BeanStatError::InvalidParameter);
    }

    let noise: Option<Normal> = if noise_variance == 0.0 {
        None
    } else {
        Some(Normal::new(0.0, noise_variance)?)
    };

    let mut rng: RandomSource = RandomSource::from_seed(seed);

    let mut points: Vec<(f64, f64)> = Vec::with_capacity(count);
    for _i in 0..count {
        let x: f64 = dist.sample_with(&mut rng);
        let eps: f64 = match &noise {
            Some(n) => n.sample_with(&mut rng),
            None => 0.0,
        };
        points.push((x, intercept + slope * x + eps));
    }
    return Ok(points);
}
