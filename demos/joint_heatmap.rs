//! Builds a bivariate joint distribution out of 2 marginals and prints its
//! density grid as a crude text heatmap, plus a noisy linear regression
//! scatter.
//!
//! Run with: `cargo run --example joint_heatmap`

use BeanStats::distributions::Exponential::Exponential;
use BeanStats::distributions::Normal::Normal;
use BeanStats::distributions::Uniform::Uniform;
use BeanStats::errors::BeanStatError;
use BeanStats::joint_distribution::JointDistribution;
use BeanStats::plotting::{linear_regression_scatter, HeatmapGrid};

const SHADES: [char; 5] = [' ', '.', ':', 'o', '#'];

fn main() -> Result<(), BeanStatError> {
    let joint: JointDistribution = JointDistribution::new(
        Box::new(Normal::standard()),
        Box::new(Exponential::new(1.0)?),
    )?;

    println!("Joint density of Normal(0, 1) x Exponential(1):\n");
    let grid: HeatmapGrid = joint.pdf_grid((-3.0, 3.0), (0.0, 3.0), 20);

    let max_density: f64 = grid
        .values
        .iter()
        .flatten()
        .fold(0.0, |acc: f64, &v| acc.max(v));

    // y on the vertical axis, highest value on top
    for j in (0..grid.y_axis.len()).rev() {
        let mut line: String = String::new();
        for i in 0..grid.x_axis.len() {
            let level: f64 = grid.values[i][j] / max_density;
            let shade: usize = (level * ((SHADES.len() - 1) as f64)).round() as usize;
            line.push(SHADES[shade]);
            line.push(' ');
        }
        println!("    {line}");
    }

    println!("\n10 joint samples: {:?}", joint.sample_multiple(10, Some(42)));

    println!("\nLinear regression cloud (Y = 1 + 2X + eps):");
    let xs: Uniform = Uniform::new(0.0, 5.0)?;
    let points: Vec<(f64, f64)> = linear_regression_scatter()
        .dist(&xs)
        .intercept(1.0)
        .slope(2.0)
        .noise_variance(0.5)
        .count(10)
        .seed(42)
        .call()?;
    for (x, y) in points {
        println!("    ({x:.3}, {y:.3})");
    }

    return Ok(());
}
