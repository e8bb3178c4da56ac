//! Output of a single-span fit.
//!
//! ## Purpose
//!
//! [`FittedCurve`] holds the smoothed values produced for one span, aligned
//! index-for-index with the running-time axis, together with the points where
//! the fitter had to fall back instead of fitting a line.
//!
//! ## Invariants
//!
//! * `x` and `fitted` have the same length as the input data.
//! * `degenerate` holds strictly increasing indices into `x`.
//! * A curve is never modified after the executor returns it.

// External dependencies
use num_traits::Float;

/// Smoothed values for one span.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve<T> {
    /// Span (fraction of points per neighborhood) that produced the curve.
    pub span: T,

    /// Running-time axis the curve is evaluated on.
    pub x: Vec<T>,

    /// Fitted value at each point of `x`.
    pub fitted: Vec<T>,

    /// Indices whose neighborhood was degenerate in the final pass.
    pub degenerate: Vec<usize>,

    /// Neighborhood size `k` used for every point.
    pub window_size: usize,

    /// Robustness iterations applied after the initial pass.
    pub iterations: usize,
}

impl<T: Float> FittedCurve<T> {
    /// Number of points on the curve.
    #[inline]
    pub fn len(&self) -> usize {
        self.fitted.len()
    }

    /// `true` if the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fitted.is_empty()
    }

    /// Iterate over `(time, fitted value)` pairs in axis order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.fitted.iter().copied())
    }

    /// `true` if any point fell back to a weighted mean.
    #[inline]
    pub fn has_degenerate_fits(&self) -> bool {
        !self.degenerate.is_empty()
    }
}
