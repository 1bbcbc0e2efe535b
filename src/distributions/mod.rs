// Discrete
pub mod Binomial;
pub mod DiscreteUniform;
pub mod Poisson;

// Continuous
pub mod ChiSquared;
pub mod Exponential;
pub mod Normal;
pub mod Uniform;
