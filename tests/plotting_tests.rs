use BeanStats::{
    configuration::Precision, distribution_trait::Distribution, distributions::Binomial::*,
    distributions::ChiSquared::*, distributions::DiscreteUniform::*, distributions::Exponential::*,
    distributions::Normal::*, distributions::Uniform::*, joint_distribution::JointDistribution,
    plotting::{linear_regression_scatter, HeatmapGrid},
};

#[inline]
fn assert_approx_eq(a: f64, b: f64) {
    let eps: f64 = 1.0e-6;

    assert!(
        (a - b).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        a,
        b,
        eps,
        (a - b).abs()
    );
}

#[cfg(test)]
mod curve_tests {
    use super::*;

    #[test]
    fn test_continuous_quantile_strategy() {
        // continuous, not piecewise, with quantile: `resolution` points at
        // evenly spaced quantile levels
        let normal: Normal = Normal::standard();
        let points: Vec<(f64, f64)> = normal.cdf_curve(50, Precision::Default);
        assert_eq!(points.len(), 50);

        // the ordinates are exacly the levels (i + 1) / (resolution + 1)
        assert_approx_eq(points[0].1, 1.0 / 51.0);
        assert_approx_eq(points[24].1, 25.0 / 51.0);
        assert_approx_eq(points[49].1, 50.0 / 51.0);

        // the abscissas grow with the levels
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        // the median level maps back to the mean
        assert_approx_eq(points[24].0, normal.quantile(25.0 / 51.0).expect("valid"));
    }

    #[test]
    fn test_continuous_quantile_pdf_strategy() {
        let exponential: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let points: Vec<(f64, f64)> = exponential.pdf_curve(20, Precision::Default);
        assert_eq!(points.len(), 20);
        // the ordinate is the density at the inverted abscissa
        for &(x, y) in &points {
            assert_approx_eq(y, exponential.pdf(x));
        }
    }

    #[test]
    fn test_continuous_piecewise_sweep_strategy() {
        // bounded support: `resolution + 1` evenly spaced x values
        let uniform: Uniform = Uniform::new(0.0, 10.0).expect("Parameters should be valid");
        let points: Vec<(f64, f64)> = uniform.cdf_curve(50, Precision::Default);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[50].0, 10.0);
        assert_eq!(points[50].1, 1.0);
        assert_approx_eq(points[25].0, 5.0);
        assert_approx_eq(points[25].1, 0.5);
    }

    #[test]
    fn test_sampled_strategy_without_quantile() {
        // no quantile: `resolution` raw samples, sorted ascending
        let chi: ChiSquared = ChiSquared::new(3).expect("Parameter should be valid");
        let points: Vec<(f64, f64)> = chi.cdf_curve(50, Precision::Default);
        assert_eq!(points.len(), 50);
        assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        // the cdf values follow the sorted abscissas
        assert!(points.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(points.iter().all(|&(x, _)| 0.0 <= x));
    }

    #[test]
    fn test_discrete_integer_strategy() {
        // discrete, not piecewise: the integers 0..=resolution
        let binomial: Binomial = Binomial::new(10, 0.5).expect("Parameters should be valid");
        let points: Vec<(f64, f64)> = binomial.cdf_curve(50, Precision::Default);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[50].0, 50.0);
        // past the support the staircase is flat at 1.0
        assert_eq!(points[10].1, 1.0);
        assert_eq!(points[50].1, 1.0);
        assert_approx_eq(points[5].1, binomial.cdf(5.0));
    }

    #[test]
    fn test_discrete_stepped_strategy() {
        // discrete piecewise: floor(resolution / step) + 3 points starting
        // two steps below min
        let uniform: DiscreteUniform =
            DiscreteUniform::new(0.0, 10.0, 2.0).expect("Parameters should be valid");
        let points: Vec<(f64, f64)> = uniform.pdf_curve(50, Precision::Default);
        assert_eq!(points.len(), 28);
        assert_eq!(points[0].0, -4.0);
        assert_eq!(points[1].0, -2.0);
        assert_eq!(points[2].0, 0.0);

        // no mass below the minimum, 1/6 on each grid point
        assert_eq!(points[0].1, 0.0);
        assert_eq!(points[1].1, 0.0);
        assert_approx_eq(points[2].1, 1.0 / 6.0);
        assert_approx_eq(points[7].1, 1.0 / 6.0);
        // past the maximum (x = 12, 14, ...) the mass is 0 again
        assert_eq!(points[8].1, 0.0);
    }
}

#[cfg(test)]
mod joint_tests {
    use super::*;

    #[test]
    fn test_joint_pdf_product() {
        let x_marginal: Normal = Normal::standard();
        let y_marginal: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        let joint: JointDistribution =
            JointDistribution::new(Box::new(x_marginal), Box::new(y_marginal))
                .expect("both marginals are valid");

        // independence: the joint density is the product of the marginals
        let expected: f64 = Normal::standard().pdf(0.0)
            * Exponential::new(2.0).expect("valid").pdf(1.0);
        assert_approx_eq(joint.pdf(0.0, 1.0), expected);

        // outside the rectangular support
        assert_eq!(joint.pdf(0.0, -1.0), 0.0);
    }

    #[test]
    fn test_joint_normalizing_constant_is_unity_for_valid_marginals() {
        let joint: JointDistribution = JointDistribution::new(
            Box::new(Uniform::new(0.0, 2.0).expect("valid")),
            Box::new(Uniform::new(0.0, 5.0).expect("valid")),
        )
        .expect("both marginals are valid");

        // uniform product: density is (1/2) * (1/5) everywhere inside
        assert_approx_eq(joint.pdf(1.0, 2.5), 0.1);
    }

    #[test]
    fn test_joint_discrete_marginal() {
        let joint: JointDistribution = JointDistribution::new(
            Box::new(Binomial::new(10, 0.5).expect("valid")),
            Box::new(Uniform::new(0.0, 1.0).expect("valid")),
        )
        .expect("both marginals are valid");

        assert_approx_eq(joint.pdf(5.0, 0.5), 0.24609375);
        assert_eq!(joint.pdf(5.5, 0.5), 0.0);
    }

    #[test]
    fn test_joint_sampling() {
        let joint: JointDistribution = JointDistribution::new(
            Box::new(Normal::standard()),
            Box::new(Exponential::new(1.0).expect("valid")),
        )
        .expect("both marginals are valid");

        let a: Vec<(f64, f64)> = joint.sample_multiple(100, Some(42));
        let b: Vec<(f64, f64)> = joint.sample_multiple(100, Some(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
        // the exponential coordinate is never negative
        assert!(a.iter().all(|&(_, y)| 0.0 <= y));
    }

    #[test]
    fn test_pdf_grid() {
        let joint: JointDistribution = JointDistribution::new(
            Box::new(Uniform::new(0.0, 1.0).expect("valid")),
            Box::new(Uniform::new(0.0, 1.0).expect("valid")),
        )
        .expect("both marginals are valid");

        let grid: HeatmapGrid = joint.pdf_grid((0.0, 1.0), (0.0, 1.0), 10);
        assert_eq!(grid.x_axis.len(), 11);
        assert_eq!(grid.y_axis.len(), 11);
        assert_eq!(grid.values.len(), 11);
        assert!(grid.values.iter().all(|row| row.len() == 11));

        assert_eq!(grid.x_axis[0], 0.0);
        assert_eq!(grid.x_axis[10], 1.0);
        // uniform x uniform on the unit square: density 1.0 everywhere inside
        assert_approx_eq(grid.values[5][5], 1.0);
    }

    #[test]
    fn test_pdf_grid_outside_support() {
        let joint: JointDistribution = JointDistribution::new(
            Box::new(Uniform::new(0.0, 1.0).expect("valid")),
            Box::new(Uniform::new(0.0, 1.0).expect("valid")),
        )
        .expect("both marginals are valid");

        // a grid wider than the support: 0.0 outside
        let grid: HeatmapGrid = joint.pdf_grid((-1.0, 2.0), (-1.0, 2.0), 6);
        assert_eq!(grid.values[0][0], 0.0);
        assert_approx_eq(grid.values[3][3], 1.0);
    }
}

#[cfg(test)]
mod regression_tests {
    use super::*;

    #[test]
    fn test_noiseless_relation_is_exact() {
        let xs: Uniform = Uniform::new(0.0, 10.0).expect("Parameters should be valid");
        let points: Vec<(f64, f64)> = linear_regression_scatter()
            .dist(&xs)
            .intercept(2.0)
            .slope(0.5)
            .noise_variance(0.0)
            .count(30)
            .seed(5)
            .call()
            .expect("parameters are valid");

        assert_eq!(points.len(), 30);
        for &(x, y) in &points {
            assert_approx_eq(y, 2.0 + 0.5 * x);
        }
    }

    #[test]
    fn test_seeded_scatter_is_deterministic() {
        let xs: Normal = Normal::standard();
        let a: Vec<(f64, f64)> = linear_regression_scatter()
            .dist(&xs)
            .noise_variance(1.0)
            .count(100)
            .seed(42)
            .call()
            .expect("parameters are valid");
        let b: Vec<(f64, f64)> = linear_regression_scatter()
            .dist(&xs)
            .noise_variance(1.0)
            .count(100)
            .seed(42)
            .call()
            .expect("parameters are valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_noise_variance() {
        let xs: Normal = Normal::standard();
        assert!(
            linear_regression_scatter()
                .dist(&xs)
                .noise_variance(-1.0)
                .call()
                .is_err()
        );
        assert!(
            linear_regression_scatter()
                .dist(&xs)
                .noise_variance(f64::NAN)
                .call()
                .is_err()
        );
    }

    #[test]
    fn test_noise_spreads_the_cloud() {
        // with a noticeable noise variance, the residuals are not all 0
        let xs: Uniform = Uniform::new(0.0, 1.0).expect("Parameters should be valid");
        let points: Vec<(f64, f64)> = linear_regression_scatter()
            .dist(&xs)
            .intercept(0.0)
            .slope(1.0)
            .noise_variance(4.0)
            .count(100)
            .seed(9)
            .call()
            .expect("parameters are valid");

        let spread: f64 = points
            .iter()
            .map(|&(x, y)| (y - x).abs())
            .fold(0.0, f64::max);
        assert!(0.1 < spread);
    }
}
