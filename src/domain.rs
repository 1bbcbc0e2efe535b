//! A [Support] represents the set of points where a distribution has mass.
//!
//! It plays the role of the `(min, max)` pair plus the step information of the
//! stepped grids. The discrete/continuous character of a distribution is not
//! stored here but in the
//! [is_discrete](crate::distribution_trait::Distribution::is_discrete) flag of
//! the distribution itself; the [Support] only describes *where* the mass
//! lives.

use core::f64;

/// The support of a distribution: the region of the real line (or the grid)
/// where its pdf/pmf is allowed to be non-zero.
///
/// Bounds can include positive and negative infinity. If the bounds are
/// finite, the values themselves are included.
///
/// Has the **invariant** that `min <= max` for all bounded variants, and that
/// for [Support::SteppedRange] `(max - min)` is an exact multiple of `step`
/// (the constructors of the distributions snap `max` to the grid to guarantee
/// it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    /// All real numbers.
    Reals,
    /// All the real numbers from the given value onwards. The value **is** included.
    From(f64),
    /// All the real numbers in `[min, max]` (**both** inclusive).
    Range(f64, f64),
    /// All the integers in `[min, max]` (**both** inclusive).
    IntegerRange(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    IntegersFrom(i64),
    /// The stepped grid `{min, min + step, min + 2*step, ..., max}`.
    SteppedRange { min: f64, max: f64, step: f64 },
}

impl Support {
    /// Returns the upper and lower bounds of the support.
    ///
    /// Take into account that the values can also include positive and
    /// negative infinity. It is guaranteed that `return.0 <= return.1`.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match self {
            Support::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            Support::From(min) => (*min, f64::INFINITY),
            Support::Range(min, max) => (*min, *max),
            Support::IntegerRange(min, max) => (*min as f64, *max as f64),
            Support::IntegersFrom(min) => (*min as f64, f64::INFINITY),
            Support::SteppedRange { min, max, .. } => (*min, *max),
        }
    }

    /// Returns true if `x` belongs to the support.
    ///
    /// For the discrete variants the alignment check is exact
    /// (`x.fract() == 0.0` for the integer grids). The stepped grid uses the
    /// given `tolerance` for the alignment check, because after a few
    /// floating point operations an on-grid value rarely lands exacly on the
    /// grid.
    #[must_use]
    pub fn contains(&self, x: f64, tolerance: f64) -> bool {
        if x.is_nan() {
            return false;
        }

        match self {
            Support::Reals => true,
            Support::From(min) => *min <= x,
            Support::Range(min, max) => (*min <= x) && (x <= *max),
            Support::IntegerRange(min, max) => {
                x.fract() == 0.0 && (*min as f64 <= x) && (x <= *max as f64)
            }
            Support::IntegersFrom(min) => x.fract() == 0.0 && (*min as f64 <= x),
            Support::SteppedRange { min, max, step } => {
                if x < *min || *max < x {
                    return false;
                }
                let t: f64 = (x - min) / step;
                return (t - t.round()).abs() <= tolerance;
            }
        }
    }

    /// The distance between two consecutive values of the support.
    ///
    /// Only meaningfull for the discrete variants; for the continuous ones it
    /// returns `1.0` (wich is what the generic staircase scan expects when it
    /// walks a plain integer support).
    #[must_use]
    pub fn step(&self) -> f64 {
        match self {
            Support::SteppedRange { step, .. } => *step,
            _ => 1.0,
        }
    }

    /// Returns true if the support has a finite upper bound.
    ///
    /// The staircase quantile scan terminates naturally on bounded supports;
    /// unbounded ones must reject `p == 1.0` before scanning.
    #[must_use]
    pub fn is_bounded_above(&self) -> bool {
        return self.get_bounds().1.is_finite();
    }
}
