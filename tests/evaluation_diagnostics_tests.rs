#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use wls_rs::internals::algorithms::fit::{fit_validated, LinearFit};
use wls_rs::internals::evaluation::diagnostics::{fitted_values, residuals, Diagnostics};
use wls_rs::internals::primitives::weights::Weights;

#[test]
fn test_fitted_values_and_residuals() {
    let fit = LinearFit::new(1.75, 0.5);
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 2.0];

    let fitted = fitted_values(&fit, &x);
    assert_eq!(fitted, vec![1.75, 2.25, 2.75]);

    let r = residuals(&y, &fitted);
    assert_eq!(r, vec![-0.75, 0.75, -0.75]);
}

#[test]
fn test_weighted_diagnostics() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 2.0];
    let w = [1.0, 2.0, 1.0];
    let weights = Weights::Sequence(&w);

    let (fit, sums) = fit_validated(&y, &x, weights);
    let diag = Diagnostics::compute(&fit.unwrap(), &y, &x, weights, &sums);

    assert_relative_eq!(diag.sum_weights, 4.0, epsilon = 1e-12);
    assert_relative_eq!(diag.weighted_mean_y, 2.25, epsilon = 1e-12);
    assert_relative_eq!(diag.weighted_sse, 2.25, epsilon = 1e-12);
    assert_relative_eq!(diag.r_squared, 1.0 - 2.25 / 2.75, epsilon = 1e-12);
}

#[test]
fn test_perfect_fit_r_squared() {
    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 1.0 + 2.0 * xi).collect();

    let (fit, sums) = fit_validated(&y, &x, Weights::Scalar(0.5));
    let diag = Diagnostics::compute(&fit.unwrap(), &y, &x, Weights::Scalar(0.5), &sums);

    assert_relative_eq!(diag.weighted_sse, 0.0, epsilon = 1e-18);
    assert_relative_eq!(diag.r_squared, 1.0, epsilon = 1e-12);
    assert_relative_eq!(diag.sum_weights, 6.0, epsilon = 1e-12);
}

#[test]
fn test_constant_response_r_squared_is_one() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [5.0; 4];

    let (fit, sums) = fit_validated(&y, &x, Weights::Scalar(1.0));
    let diag = Diagnostics::compute(&fit.unwrap(), &y, &x, Weights::Scalar(1.0), &sums);

    assert_eq!(diag.r_squared, 1.0);
}

#[test]
fn test_diagnostics_display() {
    let diag = Diagnostics {
        sum_weights: 4.0,
        weighted_mean_y: 2.25,
        weighted_sse: 2.25,
        r_squared: 0.5,
    };
    let text = format!("{}", diag);

    assert!(text.starts_with("WLS Diagnostics:"));
    assert!(text.contains("Weighted SSE:   2.250000"), "Display was: {}", text);
    assert!(text.contains("R^2:            0.500000"), "Display was: {}", text);
}
