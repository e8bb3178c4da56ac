#![cfg(feature = "dev")]
//! Tests for the single-span executor and multi-span execution.
//!
//! ## Test Organization
//!
//! 1. **Executor** - Defaults, buffers, pass structure
//! 2. **Multi-Span** - Ordering and execution modes

use approx::assert_relative_eq;

use multiloess::internals::algorithms::regression::ZeroWeightFallback;
use multiloess::internals::engine::executor::{LoessExecutor, fit_spans};
use multiloess::internals::primitives::buffer::FitBuffer;

// ============================================================================
// Helper Functions
// ============================================================================

fn noisy_trend(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 1.5).collect();
    let y: Vec<f64> = (0..n)
        .map(|i| 0.2 * i as f64 + ((i * 7919) % 13) as f64 / 13.0)
        .collect();
    (x, y)
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test executor defaults.
#[test]
fn test_executor_defaults() {
    let executor = LoessExecutor::<f64>::new();

    assert_eq!(executor.span, 0.5);
    assert_eq!(executor.iterations, 1);
    assert_eq!(executor.zero_weight_fallback, ZeroWeightFallback::UseLocalMean);
    assert_eq!(executor, LoessExecutor::default());
}

/// Test a caller-supplied buffer gives the same curve as an internal one.
///
/// Verifies buffers carry no state between fits.
#[test]
fn test_run_with_reused_buffer() {
    let (x, y) = noisy_trend(30);
    let executor = LoessExecutor::new().span(0.3).iterations(2);

    let fresh = executor.run(&x, &y, None);

    let mut buffer = FitBuffer::with_capacity(5);
    let _ = LoessExecutor::new().span(0.9).run(&x, &y, Some(&mut buffer));
    let reused = executor.run(&x, &y, Some(&mut buffer));

    assert_eq!(fresh, reused);
    assert_eq!(reused.window_size, 9);
    assert_eq!(reused.iterations, 2);
    assert_eq!(reused.x, x);
}

/// Test a single smoothing pass without robustness.
#[test]
fn test_smooth_pass_matches_fit() {
    let (x, y) = noisy_trend(20);
    let n = x.len();
    let mut fitted = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let robustness = vec![1.0; n];

    let degenerate = LoessExecutor::smooth_pass(
        &x,
        &y,
        8,
        false,
        &robustness,
        &mut fitted,
        &mut weights,
        ZeroWeightFallback::UseLocalMean,
    );
    let curve = LoessExecutor::new()
        .span(0.4)
        .iterations(0)
        .fit(&x, &y)
        .unwrap();

    assert!(degenerate.is_empty());
    assert_eq!(curve.window_size, 8);
    for (a, b) in fitted.iter().zip(&curve.fitted) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// Test residuals and weights after a pass with one large miss.
///
/// Most residuals are zero, so the scale falls back to the mean of 9.
#[test]
fn test_update_robustness_weights() {
    let y = vec![1.0, 2.0, 3.0, 40.0];
    let fitted = vec![1.0, 2.0, 3.0, 4.0];
    let mut residuals = vec![0.0; 4];
    let mut robustness = vec![1.0; 4];
    let mut scratch = vec![0.0; 4];

    LoessExecutor::update_robustness_weights(
        &y,
        &fitted,
        &mut residuals,
        &mut robustness,
        &mut scratch,
    );

    assert_eq!(residuals, vec![0.0, 0.0, 0.0, 36.0]);
    assert_eq!(robustness[0], 1.0);
    let u: f64 = 36.0 / (6.0 * 9.0);
    assert_relative_eq!(robustness[3], (1.0 - u * u).powi(2), epsilon = 1e-12);
}

// ============================================================================
// Multi-Span Tests
// ============================================================================

/// Test curves come back in span order for both execution modes.
#[test]
fn test_fit_spans_order_and_modes() {
    let (x, y) = noisy_trend(50);
    let spans = vec![0.2, 0.4, 0.6, 0.8, 1.0];

    let sequential = fit_spans(&x, &y, &spans, 1, ZeroWeightFallback::UseLocalMean, false);
    let parallel = fit_spans(&x, &y, &spans, 1, ZeroWeightFallback::UseLocalMean, true);

    let order: Vec<f64> = sequential.iter().map(|c| c.span).collect();
    assert_eq!(order, spans);
    assert_eq!(sequential, parallel);

    for (curve, &span) in sequential.iter().zip(&spans) {
        let single = LoessExecutor::new().span(span).iterations(1).fit(&x, &y).unwrap();
        assert_eq!(*curve, single);
    }
}
