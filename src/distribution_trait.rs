//! This script contains the interface used to comunicate with the
//! distributions, together with the generic sampling engine and the
//! point-generation for plotting.

use crate::configuration::{self, Precision};
use crate::domain::Support;
use crate::errors::BeanStatError;
use crate::euclid;
use crate::sampler::RandomSource;

/// The trait for any distribution (continuous or discrete).
///
/// None of the provided methods are guaranteed to work if the implemented
/// [Distribution::pdf] is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function)
/// (or pmf). So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must be normalized (total mass of `1.0` over the support)
///
/// A distribution is immutable after construction: every evaluator here is a
/// pure function of its arguments and the frozen parameters. Randomness is
/// never held by the distribution itself, it is supplied per call (see
/// [RandomSource]).
pub trait Distribution {
    // Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density Function) of the distribution at point `x`.
    /// For the discrete distributions this is the pmf (Probability Mass
    /// Function): `P(X = x)`.
    ///
    /// Evaluating outside the support is **not** an error: it returns `0.0`.
    fn pdf(&self, x: f64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative Distribution Function): `P(X <= x)`.
    ///
    /// Evaluating outside the support is **not** an error: it returns the
    /// boundary values `0.0` / `1.0` (also for `x = +-inf`).
    fn cdf(&self, x: f64) -> f64;

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// (the inverse of [Distribution::cdf]) at the probability `p`.
    ///
    ///  - If `p` is outside `[0.0, 1.0]` or is a NaN, returns
    ///     [BeanStatError::InvalidProbability].
    ///  - Discrete distributions without a closed form can implement this
    ///     with [Distribution::quantile_by_scan]. In that case `p == 1.0` is
    ///     also rejected when the support is unbounded above (the scan would
    ///     never terminate).
    ///  - Distributions without any usable quantile (see
    ///     [ChiSquared](crate::distributions::ChiSquared)) return
    ///     [BeanStatError::NoClosedFormQuantile] and must override
    ///     [Distribution::sample_fallback] instead.
    fn quantile(&self, p: f64) -> Result<f64, BeanStatError>;

    /// Returns a reference to the [Support] of the distribution, wich
    /// indicates at wich points there is probability mass. The returned
    /// support should be constant and not change.
    fn get_support(&self) -> &Support;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution, precomputed from the parameters.
    fn mean(&self) -> f64;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution, precomputed from the parameters. Always `0.0 <= variance`.
    fn variance(&self) -> f64;

    // Capability flags:

    /// True if the sample/output domain are integers (or a stepped grid)
    /// instead of the reals.
    fn is_discrete(&self) -> bool {
        return false;
    }

    /// True if the support is a bounded or stepped domain. It affects the
    /// point-generation strategy of [Distribution::cdf_curve] and
    /// [Distribution::pdf_curve].
    fn is_piecewise(&self) -> bool {
        return false;
    }

    /// True if [Distribution::quantile] can be used to invert the cdf
    /// (either with a direct formula or with the staircase scan). When false,
    /// sampling delegates to [Distribution::sample_fallback].
    fn has_closed_form_quantile(&self) -> bool {
        return true;
    }

    // Provided methods:

    /// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation):
    /// the square root of [Distribution::variance].
    fn std_dev(&self) -> f64 {
        return self.variance().sqrt();
    }

    /// [Distribution::pdf] with an explicit [Precision].
    ///
    /// The deafult implementation ignores the precision. Only the stepped
    /// distributions ([DiscreteUniform](crate::distributions::DiscreteUniform))
    /// override it, because their grid-alignment check depends on it.
    fn pdf_at(&self, x: f64, precision: Precision) -> f64 {
        let _ = precision;
        return self.pdf(x);
    }

    /// [Distribution::cdf] with an explicit [Precision].
    /// See [Distribution::pdf_at].
    fn cdf_at(&self, x: f64, precision: Precision) -> f64 {
        let _ = precision;
        return self.cdf(x);
    }

    /// Compatibility variant of [Distribution::quantile]: on an invalid input
    /// it prints a diagnostic and returns the sentinel value
    /// [configuration::QUANTILE_SENTINEL] (`1.0`) instead of an error.
    ///
    /// This mirrors the historical print-and-return-sentinel behaviour of the
    /// library. It is kept **only** as an opt-in compatibility mode: note
    /// that the sentinel is indistinguishable from a legitimate quantile of
    /// `1.0`. New code should call [Distribution::quantile].
    fn quantile_or_sentinel(&self, p: f64) -> f64 {
        return match self.quantile(p) {
            Ok(v) => v,
            Err(e) => {
                eprintln!(
                    "Invalid number inputted into the quantile function: {p}. Returning the value {}. ({e})",
                    configuration::QUANTILE_SENTINEL
                );
                configuration::QUANTILE_SENTINEL
            }
        };
    }

    /// Inverts the cdf of a **discrete** distribution by linearly scanning
    /// the support grid: returns the first value `x` (= `min + n * step` for
    /// `n = 0, 1, 2, ...`) with `p < cdf(x)`.
    ///
    /// This staircase inversion is correct because the cdf is non-decreasing
    /// and right-continuous on a discrete support. It is the deafult
    /// [Distribution::quantile] implementation for
    /// [Poisson](crate::distributions::Poisson),
    /// [Binomial](crate::distributions::Binomial) and
    /// [DiscreteUniform](crate::distributions::DiscreteUniform).
    ///
    /// ## Edge cases
    ///
    ///  - `p == 1.0` with a support unbounded above would scan forever
    ///     (no `n` ever satisfies `1 < cdf(n)`), so it is rejected with
    ///     [BeanStatError::InvalidProbability] **before** scanning.
    ///  - `p == 1.0` with a bounded support returns the maximum directly.
    ///  - The scan is capped at [configuration::QUANTILE_SCAN_MAX_STEPS] in
    ///     case the floating point partial sums of the cdf saturate below the
    ///     requested `p`; hitting the cap is a
    ///     [BeanStatError::NumericalError].
    fn quantile_by_scan(&self, p: f64) -> Result<f64, BeanStatError> {
        if p.is_nan() || p < 0.0 || 1.0 < p {
            return Err(BeanStatError::InvalidProbability);
        }

        let support: &Support = self.get_support();
        let (min, max): (f64, f64) = support.get_bounds();

        if p == 1.0 {
            if support.is_bounded_above() {
                return Ok(max);
            }
            // unbounded right support: the scan would never terminate
            return Err(BeanStatError::InvalidProbability);
        }

        let step: f64 = support.step();

        let mut n: u64 = 0;
        loop {
            let x: f64 = min + (n as f64) * step;

            if p < self.cdf(x) {
                return Ok(x);
            }

            if max <= x {
                // bounded support exhausted, cdf(max) = 1.0 > p
                return Ok(max);
            }

            n += 1;
            if configuration::QUANTILE_SCAN_MAX_STEPS <= n {
                return Err(BeanStatError::NumericalError);
            }
        }
    }

    /// Draws one sample using the given [RandomSource].
    ///
    /// The method is [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// generate a uniform `y` in `(0, 1)` and evaluate the quantile function
    /// at it. If the distribution has no usable quantile
    /// ([Distribution::has_closed_form_quantile] is false), it delegates to
    /// the simulation based [Distribution::sample_fallback] instead.
    fn sample_with(&self, rng: &mut RandomSource) -> f64 {
        if !self.has_closed_form_quantile() {
            return self.sample_fallback(rng);
        }

        let y: f64 = rng.draw();
        return match self.quantile(y) {
            Ok(v) => v,
            Err(_) => {
                // draw() is inside the open interval (0, 1), so the quantile
                // can only fail if the implementation is broken.
                std::panic!("The quantile function failed for a uniform draw inside (0, 1). ");
            }
        };
    }

    /// Simulation based sampling for the distributions whose quantile can not
    /// be inverted ([Distribution::has_closed_form_quantile] is false).
    ///
    /// The deafult implementation panics: it must be overriden by any
    /// distribution that sets the flag to false (see
    /// [ChiSquared](crate::distributions::ChiSquared), wich samples with the
    /// sum-of-squares-of-normals construction).
    fn sample_fallback(&self, rng: &mut RandomSource) -> f64 {
        let _ = rng;
        std::panic!(
            "sample_fallback called on a distribution that did not override it. Distributions with has_closed_form_quantile() == false must implement sample_fallback. "
        );
    }

    /// Draws one sample.
    ///
    ///  - If `seed` is given, a fresh generator is created from it for this
    ///     call only (same seed, same sample).
    ///  - Otherwise the process-wide shared generator is used (its state
    ///     advances, so repeated calls give different samples).
    ///
    /// Discrete distributions return a mathematical integer (stored in the
    /// f64), continuous ones any real number.
    fn sample(&self, seed: Option<u64>) -> f64 {
        let mut rng: RandomSource = RandomSource::from_seed(seed);
        return self.sample_with(&mut rng);
    }

    /// Draws `count` independent samples.
    ///
    /// If `seed` is given, a **single** generator is seeded once and reused
    /// sequentially for all the draws (not re-seeded per draw). This makes
    /// the whole batch reproducible under a fixed seed. If no seed is given,
    /// every draw advances the shared generator.
    fn sample_multiple(&self, count: usize, seed: Option<u64>) -> Vec<f64> {
        let mut rng: RandomSource = RandomSource::from_seed(seed);

        let mut ret: Vec<f64> = Vec::with_capacity(count);
        for _i in 0..count {
            ret.push(self.sample_with(&mut rng));
        }
        return ret;
    }

    /// Generates the points of the CDF curve, ready to be handed to a
    /// plotting adapter as an ordered `(x, y)` sequence.
    ///
    /// The strategy depends on the kind of distribution:
    ///  - Continuous with quantile: `resolution` evenly spaced quantile
    ///     levels `y = (i+1)/(resolution+1)` are inverted to get the `x`
    ///     values (even spread over the probability mass).
    ///  - Continuous without quantile: `resolution` raw samples are drawn,
    ///     sorted, and the cdf is evaluated at each. This path is potentially
    ///     very slow.
    ///  - Continuous piecewise: `resolution + 1` evenly spaced `x` values
    ///     sweep `[min, max]`.
    ///  - Discrete: the cdf is evaluated at the integers `0..=resolution`.
    ///  - Discrete piecewise (stepped): `floor(resolution/step) + 3` grid
    ///     points starting two steps below the minimum, so the flat tails of
    ///     the staircase are visible. The abscissas are rounded according to
    ///     `precision` ([Precision::plot_decimals]).
    fn cdf_curve(&self, resolution: usize, precision: Precision) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = Vec::new();

        if !self.is_discrete() {
            if !self.is_piecewise() {
                if self.has_closed_form_quantile() {
                    for i in 0..resolution {
                        let y: f64 = ((i + 1) as f64) / ((resolution + 1) as f64);
                        let x: f64 = match self.quantile(y) {
                            Ok(v) => v,
                            Err(_) => continue,
                            // ^y is inside (0, 1), should not happen
                        };
                        points.push((x, y));
                    }
                } else {
                    // No quantile - this method is potentially very slow
                    let mut xs: Vec<f64> = self.sample_multiple(resolution, None);
                    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
                    for x in xs {
                        points.push((x, self.cdf(x)));
                    }
                }
            } else {
                let (min, max): (f64, f64) = self.get_support().get_bounds();
                for i in 0..=resolution {
                    let x: f64 = min + (i as f64) * (max - min) / (resolution as f64);
                    points.push((x, self.cdf(x)));
                }
            }
        } else if !self.is_piecewise() {
            for i in 0..=resolution {
                let x: f64 = i as f64;
                points.push((x, self.cdf(x)));
            }
        } else {
            let support: &Support = self.get_support();
            let (min, _): (f64, f64) = support.get_bounds();
            let step: f64 = support.step();
            let num_points: usize = ((resolution as f64) / step) as usize + 3;
            let decimals: i32 = precision.plot_decimals();

            // start two steps below the minimum so the 0.0 tail is visible
            for i in 0..num_points {
                let x_raw: f64 = min + ((i as f64) - 2.0) * step;
                let x: f64 = euclid::round_to_decimals(x_raw, decimals);
                points.push((x, self.cdf_at(x, precision)));
            }
        }

        return points;
    }

    /// Generates the points of the PDF (or pmf) curve.
    ///
    /// Same point-generation strategies as [Distribution::cdf_curve], but the
    /// ordinates are the density/mass values. Takes about twice as long as
    /// the CDF curve on the quantile path (one inversion plus one pdf
    /// evaluation per point).
    fn pdf_curve(&self, resolution: usize, precision: Precision) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = Vec::new();

        if !self.is_discrete() {
            if !self.is_piecewise() {
                if self.has_closed_form_quantile() {
                    for i in 0..resolution {
                        let y: f64 = ((i + 1) as f64) / ((resolution + 1) as f64);
                        let x: f64 = match self.quantile(y) {
                            Ok(v) => v,
                            Err(_) => continue,
                            // ^y is inside (0, 1), should not happen
                        };
                        points.push((x, self.pdf(x)));
                    }
                } else {
                    // No quantile - this method is potentially very slow
                    let mut xs: Vec<f64> = self.sample_multiple(resolution, None);
                    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
                    for x in xs {
                        points.push((x, self.pdf(x)));
                    }
                }
            } else {
                let (min, max): (f64, f64) = self.get_support().get_bounds();
                for i in 0..=resolution {
                    let x: f64 = min + (i as f64) * (max - min) / (resolution as f64);
                    points.push((x, self.pdf(x)));
                }
            }
        } else if !self.is_piecewise() {
            for i in 0..=resolution {
                let x: f64 = i as f64;
                points.push((x, self.pdf(x)));
            }
        } else {
            let support: &Support = self.get_support();
            let (min, _): (f64, f64) = support.get_bounds();
            let step: f64 = support.step();
            let num_points: usize = ((resolution as f64) / step) as usize + 3;
            let decimals: i32 = precision.plot_decimals();

            for i in 0..num_points {
                let x_raw: f64 = min + ((i as f64) - 2.0) * step;
                let x: f64 = euclid::round_to_decimals(x_raw, decimals);
                points.push((x, self.pdf_at(x, precision)));
            }
        }

        return points;
    }
}
