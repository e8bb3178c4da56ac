//! Execution engine for multi-span LOESS smoothing.
//!
//! ## Purpose
//!
//! This module runs the local regression for one span over every point of the
//! series, including the robustness iterations, and fans a whole span grid out
//! over independent fits.
//!
//! ## Design notes
//!
//! * Every data point is also a query point; there is no interpolation.
//! * The nearest-neighbor window slides monotonically along the sorted axis,
//!   so neighborhood selection costs O(n) per pass.
//! * Working memory lives in a [`FitBuffer`] that is recycled across passes.
//! * Distinct spans share nothing; with the `parallel` feature they run on the
//!   rayon pool and are collected back in grid order.
//!
//! ## Invariants
//!
//! * Input x-values are sorted (checked by the validator at the entry points).
//! * Window size is at least 2 and at most n.
//! * Robustness weights are always in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not build the time axis or the span grid.
//! * This module does not aggregate curves (handled by `evaluation::aggregate`).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::regression::{RegressionContext, ZeroWeightFallback};
use crate::algorithms::robustness::apply_robustness_weights;
use crate::engine::output::FittedCurve;
use crate::engine::validator::Validator;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::Result;
use crate::primitives::window::Window;

// ============================================================================
// Single-Span Executor
// ============================================================================

/// Local regression over one span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoessExecutor<T> {
    /// Fraction of points in each neighborhood, in (0, 1].
    pub span: T,

    /// Number of robustness iterations (0 means initial fit only).
    pub iterations: usize,

    /// Policy for neighborhoods whose weights all vanish.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: Float> Default for LoessExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create an executor with span 0.5 and one robustness iteration.
    pub fn new() -> Self {
        Self {
            span: T::from(0.5).unwrap_or_else(T::one),
            iterations: 1,
            zero_weight_fallback: ZeroWeightFallback::default(),
        }
    }

    /// Set the smoothing span.
    pub fn span(mut self, span: T) -> Self {
        self.span = span;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, niter: usize) -> Self {
        self.iterations = niter;
        self
    }

    /// Set the zero-weight fallback policy.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.zero_weight_fallback = policy;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Validate inputs and parameters, then fit.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FittedCurve<T>> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_fraction(self.span)?;
        Validator::validate_iterations(self.iterations)?;
        Ok(self.run(x, y, None))
    }

    /// Fit the curve on pre-validated inputs.
    ///
    /// A caller-supplied buffer is reused; otherwise one is allocated.
    pub fn run(&self, x: &[T], y: &[T], buffer: Option<&mut FitBuffer<T>>) -> FittedCurve<T> {
        let n = x.len();
        let window_size = Window::calculate_span(n, self.span);

        let mut internal;
        let buffers = match buffer {
            Some(b) => b,
            None => {
                internal = FitBuffer::with_capacity(n);
                &mut internal
            }
        };
        buffers.prepare(n);

        let mut degenerate = Vec::new();
        for iter in 0..=self.iterations {
            degenerate = Self::smooth_pass(
                x,
                y,
                window_size,
                iter > 0, // use_robustness
                &buffers.robustness_weights,
                &mut buffers.fitted,
                &mut buffers.weights,
                self.zero_weight_fallback,
            );

            // Update robustness weights for next iteration (skip last)
            if iter < self.iterations {
                Self::update_robustness_weights(
                    y,
                    &buffers.fitted,
                    &mut buffers.residuals,
                    &mut buffers.robustness_weights,
                    &mut buffers.scratch,
                );
            }
        }

        debug!(
            span = self.span.to_f64().unwrap_or(f64::NAN),
            points = n,
            window_size,
            iterations = self.iterations,
            "fitted span"
        );
        if !degenerate.is_empty() {
            warn!(
                span = self.span.to_f64().unwrap_or(f64::NAN),
                count = degenerate.len(),
                first_index = degenerate[0],
                "degenerate neighborhoods fell back to the weighted mean"
            );
        }

        FittedCurve {
            span: self.span,
            x: x.to_vec(),
            fitted: buffers.fitted.clone(),
            degenerate,
            window_size,
            iterations: self.iterations,
        }
    }

    // ========================================================================
    // Main Algorithmic Logic
    // ========================================================================

    /// Perform one smoothing pass over all points.
    ///
    /// Returns the indices whose neighborhood was degenerate.
    #[allow(clippy::too_many_arguments)]
    pub fn smooth_pass(
        x: &[T],
        y: &[T],
        window_size: usize,
        use_robustness: bool,
        robustness_weights: &[T],
        fitted: &mut [T],
        weights: &mut [T],
        zero_weight_fallback: ZeroWeightFallback,
    ) -> Vec<usize> {
        let n = x.len();
        let mut degenerate = Vec::new();
        let mut window = Window::initialize(0, window_size, n);

        for idx in 0..n {
            window.recenter(x, idx, n);

            let mut ctx = RegressionContext {
                x,
                y,
                idx,
                window,
                use_robustness,
                robustness_weights,
                weights: &mut *weights,
                zero_weight_fallback,
            };

            let estimate = ctx.fit();
            fitted[idx] = estimate.value;
            if estimate.degenerate {
                degenerate.push(idx);
            }
        }

        degenerate
    }

    /// Recompute robustness weights from the residuals of the latest pass.
    pub fn update_robustness_weights(
        y: &[T],
        fitted: &[T],
        residuals: &mut [T],
        robustness_weights: &mut [T],
        scratch: &mut [T],
    ) {
        for i in 0..y.len() {
            residuals[i] = y[i] - fitted[i];
        }
        apply_robustness_weights(residuals, robustness_weights, scratch);
    }
}

/// Fit one local regression curve of `y` on `x` for `span`.
pub fn fit_curve<T: Float>(x: &[T], y: &[T], span: T, iterations: usize) -> Result<FittedCurve<T>> {
    LoessExecutor::new().span(span).iterations(iterations).fit(x, y)
}

// ============================================================================
// Multi-Span Execution
// ============================================================================

/// Fit every span of `spans` over the same pre-validated series.
///
/// Curves come back in the order of `spans` regardless of `parallel`.
pub fn fit_spans<T>(
    x: &[T],
    y: &[T],
    spans: &[T],
    iterations: usize,
    zero_weight_fallback: ZeroWeightFallback,
    parallel: bool,
) -> Vec<FittedCurve<T>>
where
    T: Float + Send + Sync,
{
    let executor = |span: T| {
        LoessExecutor::new()
            .span(span)
            .iterations(iterations)
            .zero_weight_fallback(zero_weight_fallback)
    };

    #[cfg(feature = "parallel")]
    if parallel {
        return spans
            .par_iter()
            .map_init(
                || FitBuffer::with_capacity(x.len()),
                |buffer, &span| executor(span).run(x, y, Some(buffer)),
            )
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut buffer = FitBuffer::with_capacity(x.len());
    spans
        .iter()
        .map(|&span| executor(span).run(x, y, Some(&mut buffer)))
        .collect()
}
