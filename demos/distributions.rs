//! A small tour of the library: construct some distributions, evaluate them,
//! sample them and print the points of their curves.
//!
//! Run with: `cargo run --example distributions`

use BeanStats::configuration::{DEFAULT_PLOT_RESOLUTION, Precision};
use BeanStats::distribution_trait::Distribution;
use BeanStats::distributions::Binomial::Binomial;
use BeanStats::distributions::ChiSquared::ChiSquared;
use BeanStats::distributions::Exponential::Exponential;
use BeanStats::distributions::Normal::Normal;
use BeanStats::distributions::Poisson::Poisson;
use BeanStats::errors::BeanStatError;

fn main() -> Result<(), BeanStatError> {
    let normal: Normal = Normal::new(2.0, 4.0)?;
    println!(
        "Normal(2, 4): mean = {}, std_dev = {}, cdf(4) = {}",
        normal.mean(),
        normal.std_dev(),
        normal.cdf(4.0)
    );
    println!("10 seeded samples: {:?}", normal.sample_multiple(10, Some(42)));

    let exponential: Exponential = Exponential::new(2.0)?;
    println!(
        "\nExponential(2): median = {}",
        exponential.quantile(0.5)?
    );

    let poisson: Poisson = Poisson::new(3.0)?;
    println!(
        "Poisson(3): pmf(0) = {}, quantile(0.5) = {} (by staircase scan)",
        poisson.pdf(0.0),
        poisson.quantile(0.5)?
    );

    let binomial: Binomial = Binomial::new(10, 0.5)?;
    println!("Binomial(10, 0.5): pmf(5) = {}", binomial.pdf(5.0));

    // the Chi Squared has no quantile function: sampling falls back to the
    // sum-of-squares-of-normals construction
    let chi: ChiSquared = ChiSquared::new(4)?;
    println!(
        "\nChiSquared(4): cdf(2) = {}, 5 samples = {:?}",
        chi.cdf(2.0),
        chi.sample_multiple(5, Some(7))
    );

    let curve: Vec<(f64, f64)> =
        Normal::standard().cdf_curve(DEFAULT_PLOT_RESOLUTION, Precision::Default);
    println!(
        "\nCDF curve of the standard normal ({} points, first 10 shown):",
        curve.len()
    );
    for (x, y) in curve.iter().take(10) {
        println!("    ({x:.4}, {y:.4})");
    }

    return Ok(());
}
