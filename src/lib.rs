#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `BeanStats` should have a snake case name convert
// the identifier to snake case: `bean_stats`"
// The rest of the names will follow the snake_case convention.

//! # Bean Stats
//!
//!
//! This library is a small teaching statistics library that provides:
//!
//! - [x] Interface to create distributions
//! - [x] Common distributions (ready to be used in any calculation)
//! - [x] Sampling trough inverse transform sampling (seeded or unseeded)
//! - [x] Quantile-scan fallback for discrete distributions
//! - [x] Simulation based sampling for distributions without a quantile
//! - [x] Bivariate joint distributions (independence assumed)
//! - [x] Data generation for plotting (curves, heatmaps, regression clouds)
//! - [ ] Multivariate (>2D) joint distributions
//! - [ ] Parameter estimation from data
//! - [x] Updated to rust 2024 version
//!
//! ## Distributions
//!
//! We have defined the trait [Distribution](distribution_trait::Distribution)
//! wich is a basic trait (interface) to work with distributions. The requiered
//! methods to implement are:
//!  - [pdf](distribution_trait::Distribution::pdf): the pdf (or pmf) of the distribution.
//!  - [cdf](distribution_trait::Distribution::cdf): the cdf of the distribution.
//!  - [quantile](distribution_trait::Distribution::quantile): the inverse of the cdf.
//!  - [get_support](distribution_trait::Distribution::get_support): the
//!     [Support](domain::Support) of the distribution.
//!  - [mean](distribution_trait::Distribution::mean) and
//!     [variance](distribution_trait::Distribution::variance): precomputed
//!     from the parameters at construction.
//!
//! After this, a wide array of funcions are avaliable: sampling (seeded or
//! unseeded), batch sampling, and the point generation for the CDF/PDF curves.
//! Distributions whose quantile has no closed form can use the provided
//! [quantile_by_scan](distribution_trait::Distribution::quantile_by_scan)
//! (discrete staircase inversion) or override
//! [sample_fallback](distribution_trait::Distribution::sample_fallback)
//! (simulation based sampling, see
//! [ChiSquared](distributions::ChiSquared)).
//!
//! The distributions that we have already implemented:
//!
//! ### Continuous distributions:
//!
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Chi-squared distribution](crate::distributions::ChiSquared) ([Wiki](https://en.wikipedia.org/wiki/Chi-squared_distribution))
//!  - [ ] ... (more to come (?))
//!
//! ### Discrete distributions:
//!
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Discrete Uniform](distributions::DiscreteUniform) ([Wiki](https://en.wikipedia.org/wiki/Discrete_uniform_distribution))
//!  - [x] [Poisson distribution](distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [ ] ... (more to come (?))
//!
//! ## Joint distributions
//!
//! Two marginals can be combined into a
//! [JointDistribution](joint_distribution::JointDistribution), wich assumes
//! independence, multiplies the densities and renormalizes over the product
//! of the supports. It can be sampled (independent pairs) and rendered into
//! a heatmap matrix for an external plotting adapter.
//!
//! ## Visualization
//!
//! This library never draws anything.
//! [cdf_curve](distribution_trait::Distribution::cdf_curve),
//! [pdf_curve](distribution_trait::Distribution::pdf_curve),
//! [pdf_grid](joint_distribution::JointDistribution::pdf_grid) and
//! [linear_regression_scatter](plotting::linear_regression_scatter) only
//! produce the data points. Whatever consumes them (a plotting crate, a csv
//! file...) is up to the user.
//!
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod joint_distribution;
pub mod plotting;
pub mod sampler;
