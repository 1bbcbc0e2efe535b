//! The source of randomness used by the sampling engine.
//!
//! Two generator lifetimes exist (and only two):
//!  - The **shared** generator: the process-wide thread-local generator
//!     (`rand::rng()`), created once and mutated across every unseeded call.
//!     Its draw ordering depends on call order, so unseeded results are not
//!     reproducible across runs.
//!  - The **seeded** generator: a fresh [StdRng] created for a single call
//!     from a user seed and discarded after it. Same seed, same output
//!     sequence.
//!
//! The source is always passed explicitly to the functions that consume it
//! (never hidden global state), wich also allows the tests to substitute a
//! [RandomSource::Fixed] stub with a known sequence.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A stream of uniform draws in the open unit interval `(0, 1)`.
pub enum RandomSource {
    /// The process-wide thread-local generator. State advances across calls.
    Shared(ThreadRng),
    /// A generator seeded for one call. Fully reproducible.
    Seeded(StdRng),
    /// A fixed sequence, cycled. Only intended for tests.
    Fixed(Vec<f64>, usize),
}

impl RandomSource {
    /// The shared (unseeded) source.
    #[must_use]
    pub fn shared() -> RandomSource {
        return RandomSource::Shared(rand::rng());
    }

    /// A fresh source seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> RandomSource {
        return RandomSource::Seeded(StdRng::seed_from_u64(seed));
    }

    /// [RandomSource::seeded] if a seed is given, [RandomSource::shared]
    /// otherwise. This is the policy of every `seed: Option<u64>` parameter
    /// in the library.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> RandomSource {
        return match seed {
            Some(s) => RandomSource::seeded(s),
            None => RandomSource::shared(),
        };
    }

    /// A source that cycles trough the given values. Only intended for tests.
    ///
    /// The values should be inside `(0, 1)`; they are returned as-is.
    #[must_use]
    pub fn fixed(values: Vec<f64>) -> RandomSource {
        return RandomSource::Fixed(values, 0);
    }

    /// The next uniform draw in the **open** interval `(0, 1)`.
    ///
    /// `rand` generates values in `[0, 1)`; an exact `0.0` is redrawn so the
    /// quantile functions never see it (for example the standard normal
    /// quantile of `0.0` is `-inf`).
    pub fn draw(&mut self) -> f64 {
        match self {
            RandomSource::Shared(rng) => {
                let mut y: f64 = rng.random();
                while y == 0.0 {
                    y = rng.random();
                }
                return y;
            }
            RandomSource::Seeded(rng) => {
                let mut y: f64 = rng.random();
                while y == 0.0 {
                    y = rng.random();
                }
                return y;
            }
            RandomSource::Fixed(values, index) => {
                assert!(!values.is_empty(), "RandomSource::Fixed with no values. ");
                let y: f64 = values[*index % values.len()];
                *index += 1;
                return y;
            }
        }
    }
}
