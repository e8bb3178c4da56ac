#![cfg(feature = "dev")]
//! Tests for windowing primitives and fit buffers.
//!
//! These tests verify the nearest-neighbor window used by every local fit:
//! - Neighborhood size from the span
//! - Initial placement and clipping
//! - Recentering along the sorted axis, including ties
//!
//! ## Test Organization
//!
//! 1. **Neighborhood Size** - Rounding and clamping of `k`
//! 2. **Initialization** - Placement at the boundaries
//! 3. **Recentering** - Nearest neighbors, ties, uneven spacing
//! 4. **Buffers** - Preparation of working memory

use multiloess::internals::primitives::buffer::FitBuffer;
use multiloess::internals::primitives::window::Window;

// ============================================================================
// Helper Functions
// ============================================================================

/// Indices of the `k` nearest points to `x[idx]`, ties to the lower index.
fn brute_force_window(x: &[f64], idx: usize, k: usize) -> (usize, usize) {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| {
        let da = (x[a] - x[idx]).abs();
        let db = (x[b] - x[idx]).abs();
        da.partial_cmp(&db).unwrap().then(a.cmp(&b))
    });
    let chosen = &order[..k];
    (*chosen.iter().min().unwrap(), *chosen.iter().max().unwrap())
}

// ============================================================================
// Neighborhood Size Tests
// ============================================================================

/// Test `k = ceil(span * n)`.
///
/// Verifies products that land on an integer are not rounded up.
#[test]
fn test_calculate_span_ceiling() {
    assert_eq!(Window::calculate_span(10, 0.3f64), 3);
    assert_eq!(Window::calculate_span(10, 0.35f64), 4);
    assert_eq!(Window::calculate_span(100, 0.1f64), 10);
    assert_eq!(Window::calculate_span(7, 0.5f64), 4);
    assert_eq!(Window::calculate_span(10, 0.7f64), 7);
}

/// Test clamping of `k` to `[2, n]`.
#[test]
fn test_calculate_span_clamped() {
    assert_eq!(Window::calculate_span(10, 0.01f64), 2);
    assert_eq!(Window::calculate_span(10, 1.0f64), 10);
    assert_eq!(Window::calculate_span(2, 0.1f64), 2);
}

// ============================================================================
// Initialization Tests
// ============================================================================

/// Test initial placement around an index.
#[test]
fn test_initialize_positions() {
    assert_eq!(Window::initialize(0, 3, 10), Window { left: 0, right: 2 });
    assert_eq!(Window::initialize(5, 3, 10), Window { left: 4, right: 6 });
    assert_eq!(Window::initialize(9, 3, 10), Window { left: 7, right: 9 });
}

/// Test a window covering the whole series.
#[test]
fn test_initialize_full_width() {
    let window = Window::initialize(3, 10, 10);

    assert_eq!(window, Window { left: 0, right: 9 });
    assert_eq!(window.len(), 10);
}

// ============================================================================
// Recentering Tests
// ============================================================================

/// Test ties between equidistant neighbors resolve to the lower index.
#[test]
fn test_recenter_tie_prefers_lower_index() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let mut window = Window::initialize(0, 2, 5);

    window.recenter(&x, 2, 5);

    assert_eq!(window, Window { left: 1, right: 2 });
}

/// Test the sliding window matches brute-force nearest neighbors.
///
/// Verifies uneven spacing, every query point, several window sizes.
#[test]
fn test_recenter_matches_brute_force() {
    let x = vec![
        0.5, 1.0, 1.2, 4.0, 4.1, 4.15, 9.0, 12.0, 12.5, 20.0, 20.2, 31.0,
    ];
    let n = x.len();

    for k in [2, 3, 5, 8, 12] {
        let mut window = Window::initialize(0, k, n);
        for idx in 0..n {
            window.recenter(&x, idx, n);
            let (left, right) = brute_force_window(&x, idx, k);
            assert_eq!(
                (window.left, window.right),
                (left, right),
                "k={k}, idx={idx}"
            );
            assert_eq!(window.len(), k);
        }
    }
}

/// Test the bandwidth is the distance to the farthest neighbor.
#[test]
fn test_max_distance() {
    let x = vec![0.0, 1.0, 3.0, 7.0];
    let window = Window { left: 0, right: 2 };

    assert_eq!(window.max_distance(&x, 1.0), 2.0);
    assert_eq!(window.max_distance(&x, 0.0), 3.0);
}

// ============================================================================
// Buffer Tests
// ============================================================================

/// Test buffer preparation.
///
/// Verifies lengths and the initial robustness weights.
#[test]
fn test_buffer_prepare() {
    let mut buffer = FitBuffer::<f64>::with_capacity(4);
    buffer.prepare(6);

    assert_eq!(buffer.fitted.len(), 6);
    assert_eq!(buffer.weights.len(), 6);
    assert_eq!(buffer.residuals.len(), 6);
    assert_eq!(buffer.scratch.len(), 6);
    assert!(buffer.robustness_weights.iter().all(|&w| w == 1.0));

    buffer.robustness_weights[0] = 0.0;
    buffer.prepare(3);
    assert_eq!(buffer.robustness_weights, vec![1.0; 3]);
}
