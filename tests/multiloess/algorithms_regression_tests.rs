#![cfg(feature = "dev")]
//! Tests for local weighted linear regression.
//!
//! These tests verify the per-point fit used by every span:
//! - Weighted least squares on a centered neighborhood
//! - Degenerate neighborhoods falling back to the weighted mean
//! - Zero-weight fallback policies
//!
//! ## Test Organization
//!
//! 1. **Linear Fit** - Exact lines, weights, singular designs
//! 2. **Weighted Mean** - Plain and vanishing weights
//! 3. **Regression Context** - Full per-point fits and fallbacks

use approx::assert_relative_eq;

use multiloess::internals::algorithms::regression::{
    LinearFit, RegressionContext, ZeroWeightFallback, weighted_mean,
};
use multiloess::internals::primitives::window::Window;

// ============================================================================
// Helper Functions
// ============================================================================

fn context<'a>(
    x: &'a [f64],
    y: &'a [f64],
    idx: usize,
    window: Window,
    robustness_weights: &'a [f64],
    weights: &'a mut [f64],
    zero_weight_fallback: ZeroWeightFallback,
) -> RegressionContext<'a, f64> {
    RegressionContext {
        x,
        y,
        idx,
        window,
        use_robustness: true,
        robustness_weights,
        weights,
        zero_weight_fallback,
    }
}

// ============================================================================
// Linear Fit Tests
// ============================================================================

/// Test an exact line is recovered.
///
/// Verifies slope and the intercept at the centering point.
#[test]
fn test_fit_wls_exact_line() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let w = vec![0.3, 1.0, 0.7, 0.1];

    let fit = LinearFit::fit_wls(&x, &y, &w, 1.5, 1.5).unwrap();

    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 4.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(0.5), 5.0, epsilon = 1e-12);
}

/// Test a fit far from the origin stays accurate.
#[test]
fn test_fit_wls_far_from_origin() {
    let x = vec![1e6, 1e6 + 1.0, 1e6 + 2.0];
    let y = vec![3.0, 3.5, 4.0];
    let w = vec![1.0, 1.0, 1.0];

    let fit = LinearFit::fit_wls(&x, &y, &w, 1e6 + 1.0, 1.0).unwrap();

    assert_relative_eq!(fit.predict(0.0), 3.5, epsilon = 1e-9);
}

/// Test singular designs return `None`.
///
/// Verifies coincident x-values and vanishing weights.
#[test]
fn test_fit_wls_singular() {
    let y = vec![1.0, 2.0, 3.0];

    assert!(LinearFit::fit_wls(&[2.0, 2.0, 2.0], &y, &[1.0, 1.0, 1.0], 2.0, 1.0).is_none());
    assert!(LinearFit::fit_wls(&[1.0, 2.0, 3.0], &y, &[0.0, 0.0, 0.0], 2.0, 1.0).is_none());
    // Only one point carries weight
    assert!(LinearFit::fit_wls(&[1.0, 2.0, 3.0], &y, &[0.0, 1.0, 0.0], 2.0, 1.0).is_none());
}

// ============================================================================
// Weighted Mean Tests
// ============================================================================

/// Test the weighted mean.
#[test]
fn test_weighted_mean() {
    assert_relative_eq!(
        weighted_mean(&[1.0, 2.0, 4.0], &[1.0, 1.0, 2.0]).unwrap(),
        11.0 / 4.0
    );
    assert!(weighted_mean(&[1.0, 2.0], &[0.0, 0.0]).is_none());
}

// ============================================================================
// Regression Context Tests
// ============================================================================

/// Test a regular neighborhood fits a line.
#[test]
fn test_context_linear_neighborhood() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![1.0, 3.0, 5.0, 7.0, 9.0];
    let robustness = vec![1.0; 5];
    let mut weights = vec![0.0; 5];

    let mut ctx = context(
        &x,
        &y,
        0,
        Window { left: 0, right: 2 },
        &robustness,
        &mut weights,
        ZeroWeightFallback::UseLocalMean,
    );
    let estimate = ctx.fit();

    assert!(!estimate.degenerate);
    assert_relative_eq!(estimate.value, 1.0, epsilon = 1e-12);
}

/// Test a three-point neighborhood centered on the query point.
///
/// The outer neighbors sit on the kernel boundary and get weight zero, so the
/// fit falls back to the weighted mean, which is the query point's own value.
#[test]
fn test_context_degenerate_neighborhood() {
    let x = vec![10.0, 20.0, 30.0];
    let y = vec![4.0, 6.0, 11.0];
    let robustness = vec![1.0; 3];
    let mut weights = vec![0.0; 3];

    let mut ctx = context(
        &x,
        &y,
        1,
        Window { left: 0, right: 2 },
        &robustness,
        &mut weights,
        ZeroWeightFallback::UseLocalMean,
    );
    let estimate = ctx.fit();

    assert!(estimate.degenerate);
    assert_eq!(estimate.value, 6.0);
}

/// Test the zero-weight fallback policies.
///
/// Verifies:
/// - `UseLocalMean` returns the unweighted neighborhood mean
/// - `ReturnOriginal` returns the observed value
#[test]
fn test_context_zero_weight_fallback() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![2.0, 4.0, 9.0, 1.0];
    let robustness = vec![0.0; 4];

    let mut weights = vec![0.0; 4];
    let local_mean = context(
        &x,
        &y,
        1,
        Window { left: 0, right: 2 },
        &robustness,
        &mut weights,
        ZeroWeightFallback::UseLocalMean,
    )
    .fit();
    assert!(local_mean.degenerate);
    assert_relative_eq!(local_mean.value, 5.0);

    let mut weights = vec![0.0; 4];
    let original = context(
        &x,
        &y,
        1,
        Window { left: 0, right: 2 },
        &robustness,
        &mut weights,
        ZeroWeightFallback::ReturnOriginal,
    )
    .fit();
    assert!(original.degenerate);
    assert_eq!(original.value, 4.0);
}

/// Test the default fallback policy.
#[test]
fn test_zero_weight_fallback_default() {
    assert_eq!(ZeroWeightFallback::default(), ZeroWeightFallback::UseLocalMean);
}
