//! Euclid contains uscefull math functions.
//!
//! The special functions (gamma, erf and their relatives) are consumed from
//! [statrs](https://docs.rs/statrs/latest/statrs/) and only wrapped here under
//! the names the rest of the library uses. The combinatorial helpers and the
//! rounding/grid utilities are our own.

/// The [error function](https://en.wikipedia.org/wiki/Error_function).
///
/// `erf(x) = 2/sqrt(pi) * integral {0 -> x} exp(-t^2) dt`
#[must_use]
pub fn erf(x: f64) -> f64 {
    return statrs::function::erf::erf(x);
}

/// The inverse of the [error function](https://en.wikipedia.org/wiki/Error_function).
///
/// Note that `erf_inv(-1.0) = -inf` and `erf_inv(1.0) = inf`.
#[must_use]
pub fn erf_inv(x: f64) -> f64 {
    return statrs::function::erf::erf_inv(x);
}

/// The natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function).
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    return statrs::function::gamma::ln_gamma(x);
}

/// The regularized lower [incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function)
/// `P(a, x)`.
///
/// It is requiered that `0.0 < a`. The invalid inputs `x <= 0.0` return `0.0`
/// and `x = inf` returns `1.0` (the limit values), so the cdfs built on top of
/// this function return the correct boundary values.
#[must_use]
pub fn lower_incomplete_gamma_reg(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    return statrs::function::gamma::gamma_lr(a, x);
}

/// The [factorial](https://en.wikipedia.org/wiki/Factorial) of `n` as a float.
///
/// Returns `inf` for `170 < n` (overflow of f64).
#[must_use]
pub fn factorial(n: u64) -> f64 {
    if 170 < n {
        return f64::INFINITY;
    }

    let mut acc: f64 = 1.0;
    for i in 2..=n {
        acc = acc * (i as f64);
    }
    return acc;
}

/// The natural logarithm of the factorial of `n`.
///
/// `ln(n!) = ln_gamma(n + 1)`. Does not overflow, so prefer this over
/// [factorial] inside the pmf formulas.
#[must_use]
pub fn ln_factorial(n: f64) -> f64 {
    return ln_gamma(n + 1.0);
}

/// The [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
/// `C(n, k)` = "n choose k" as a float.
///
/// Computed with the multiplicative formula, wich is exact for all the values
/// that fit in the 53 bits of mantissa of a f64 (well beyond anything a
/// teaching tool needs).
#[must_use]
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if n < k {
        return 0.0;
    }

    // C(n, k) == C(n, n - k), use the smaller one
    let k: u64 = k.min(n - k);

    let mut acc: f64 = 1.0;
    for i in 0..k {
        acc = acc * ((n - i) as f64) / ((i + 1) as f64);
    }
    return acc.round();
}

/// Rounds `x` to `decimals` decimal places.
///
/// Used by the stepped distributions to decide if a point lies on their grid
/// and to clean up the generated plot abscissas (see
/// [Precision](crate::configuration::Precision)).
#[must_use]
pub fn round_to_decimals(x: f64, decimals: i32) -> f64 {
    let scale: f64 = 10.0_f64.powi(decimals);
    return (x * scale).round() / scale;
}

/// `n` evenly spaced values from `lo` to `hi`, **both inclusive**.
///
/// Mirrors what most numeric packages call `linspace`. For `n == 1` the single
/// value is `lo`.
#[must_use]
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![lo];
    }

    let step: f64 = (hi - lo) / ((n - 1) as f64);
    return (0..n).map(|i| lo + (i as f64) * step).collect::<Vec<f64>>();
}
