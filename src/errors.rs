use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeanStatError {
    /// The parameters given at construction do not fullfill the conditions of
    /// the distribution. Maybe the maximum was not greater than the minimum,
    /// a rate was negative or a probability was outside `[0, 1]`. It may also
    /// be a NaN.
    #[error(
        "The parameters given at construction do not fullfill the conditions of the distribution. Maybe the maximum was not greater than the minimum, a rate was negative or a probability was outside [0, 1]. It may also be a NaN. "
    )]
    InvalidParameter,
    /// The quantile function was evaluated with a number that is not a valid
    /// probability (outside `[0, 1]` or a NaN). For distributions with
    /// unbounded right support, `1.0` exacly is also rejected because the
    /// staircase scan would never terminate for it.
    #[error(
        "The quantile function was evaluated with a number that is not a valid probability (outside [0, 1] or NaN; 1.0 exacly for unbounded discrete support). "
    )]
    InvalidProbability,
    /// The quantile of this distribution has no closed form (for example
    /// [ChiSquared](crate::distributions::ChiSquared)). Use
    /// [sample](crate::distribution_trait::Distribution::sample), wich falls
    /// back to simulation based sampling.
    #[error(
        "The quantile of this distribution has no closed form. Use sampling, wich falls back to simulation. "
    )]
    NoClosedFormQuantile,
    /// There was an error when performing some numerical computation.
    /// Overflow/underflow/non-terminating scan.
    #[error(
        "There was an error when performing some numerical computation. Overflow/underflow/non-terminating scan. "
    )]
    NumericalError,
}
