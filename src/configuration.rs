
//! This file contains the deafult values and other value choices used trough the library.
//!

/// The deafult number of points generated for a CDF or PDF curve.
///
/// 50 points is enough to get a smooth curve for the continuous distributions.
/// For the discrete ones it determines up to wich value the curve is evaluated.
pub static DEFAULT_PLOT_RESOLUTION: usize = 50;

/// The maximum number of steps that the staircase quantile scan
/// ([crate::distribution_trait::Distribution::quantile_by_scan]) will perform
/// before giving up with a
/// [NumericalError](crate::errors::BeanStatError::NumericalError).
///
/// The scan is guaranteed to terminate for any probability stricly less than 1,
/// but for probabilities extremely close to 1 the partial sums of the cdf can
/// saturate below 1.0 in floating point. The cap turns that situation into an
/// error instead of a very long loop.
///
/// `1 << 20 = 1 048 576`
pub static QUANTILE_SCAN_MAX_STEPS: u64 = 1 << 20;

/// The coarse tolerance (`10^-5`) used when [Precision::Safe] is selected.
pub static COARSE_TOLERANCE: f64 = 1e-5;

/// The fine tolerance (`10^-9`) used when [Precision::Default] is selected.
pub static FINE_TOLERANCE: f64 = 1e-9;

/// The value returned by
/// [quantile_or_sentinel](crate::distribution_trait::Distribution::quantile_or_sentinel)
/// when the quantile function is called with an invalid probability.
///
/// Returning `1.0` (instead of failing) is the historical behaviour of this
/// library and is kept only as an opt-in compatibility mode. New code should
/// call [quantile](crate::distribution_trait::Distribution::quantile) and
/// handle the [Result].
pub const QUANTILE_SENTINEL: f64 = 1.0;

/// Selects how aggressively the stepped (piecewise discrete) distributions
/// round before deciding if a point `x` lies on their grid, and how the
/// generated plot abscissas are rounded.
///
/// The old interface used a duck-typed `safe` boolean with implicit meaning.
/// Here the two modes are named:
///  - [Precision::Default]: fine tolerance ([FINE_TOLERANCE], 9 decimals for
///     the alignment check, 10 decimals for plot abscissas).
///  - [Precision::Safe]: coarse tolerance ([COARSE_TOLERANCE], 5 decimals for
///     the alignment check, 6 decimals for plot abscissas). Absolutely safe
///     against floating point noise, but it can not tell apart grid points
///     closer than `10^-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Default,
    Safe,
}

impl Precision {
    /// Number of decimal places used when checking if a value is aligned
    /// with the grid of a stepped distribution.
    #[must_use]
    pub const fn alignment_decimals(self) -> i32 {
        match self {
            Precision::Default => 9,
            Precision::Safe => 5,
        }
    }

    /// Number of decimal places used to round the generated plot abscissas
    /// of stepped distributions.
    #[must_use]
    pub const fn plot_decimals(self) -> i32 {
        match self {
            Precision::Default => 10,
            Precision::Safe => 6,
        }
    }

    /// The tolerance value associated with this precision mode.
    #[must_use]
    pub fn tolerance(self) -> f64 {
        match self {
            Precision::Default => FINE_TOLERANCE,
            Precision::Safe => COARSE_TOLERANCE,
        }
    }
}
