//! Span grid generation.
//!
//! ## Purpose
//!
//! Enumerates the smoothing spans to fit from a `(low, high, step)` triple.
//!
//! ## Design notes
//!
//! * Interior spans are rounded to two decimal digits so they serve as stable
//!   labels for aggregation and coloring.
//! * The endpoints are kept verbatim: the grid starts at exactly `low` and
//!   always ends at exactly `high`, even when `step` does not divide the range.
//! * Interior spans that would round onto or past `high` are dropped rather
//!   than overshooting it.
//!
//! ## Invariants
//!
//! * Strictly ascending, every element in `[low, high]`.
//! * Non-empty; a single element when `low == high`.

// External dependencies
use core::ops::Deref;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::{MultiLoessError, Result};

/// Largest number of spans a grid may hold.
pub const MAX_SPANS: usize = 10_000;

/// Number of decimal digits kept on interior spans.
pub const SPAN_DECIMALS: i32 = 2;

/// Ordered, distinct smoothing spans in `(0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanGrid<T>(Vec<T>);

impl<T: Float> SpanGrid<T> {
    /// Enumerate `low, low + step, ...` up to and including `high`.
    pub fn new(low: T, high: T, step: T) -> Result<Self> {
        Validator::validate_span_range(low, high, step)?;

        let steps = ((high - low) / step + T::from(1e-9).unwrap_or_else(T::epsilon))
            .floor()
            .to_usize()
            .unwrap_or(usize::MAX);

        if steps >= MAX_SPANS {
            return Err(MultiLoessError::GridTooLarge {
                got: steps.saturating_add(1),
                max: MAX_SPANS,
            });
        }

        let mut spans = Vec::with_capacity(steps + 2);
        spans.push(low);

        for i in 1..=steps {
            let span = round_span(low + step * T::from(i).unwrap_or_else(T::zero));
            if span >= high {
                break;
            }
            if spans.last().is_some_and(|&last| span <= last) {
                continue;
            }
            spans.push(span);
        }

        if spans.last().is_some_and(|&last| last < high) {
            spans.push(high);
        }

        Ok(Self(spans))
    }

    /// View the spans as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Smallest span (always `low`).
    pub fn low(&self) -> T {
        self.0[0]
    }

    /// Largest span (always `high`).
    pub fn high(&self) -> T {
        self.0[self.0.len() - 1]
    }

    /// Consume the grid into its spans.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for SpanGrid<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// Round a span to [`SPAN_DECIMALS`] decimal digits.
#[inline]
pub fn round_span<T: Float>(value: T) -> T {
    let scale = T::from(10f64.powi(SPAN_DECIMALS)).unwrap_or_else(T::one);
    (value * scale).round() / scale
}

/// Build the span grid for `(low, high, step)`.
pub fn build_span_grid<T: Float>(low: T, high: T, step: T) -> Result<SpanGrid<T>> {
    SpanGrid::new(low, high, step)
}

// ============================================================================
// Span Range
// ============================================================================

/// The `(low, high, step)` triple a span grid is generated from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanRange<T> {
    /// Smallest span, in (0, 1].
    pub low: T,

    /// Largest span, in [low, 1].
    pub high: T,

    /// Distance between consecutive spans.
    pub step: T,
}

impl<T: Float> Default for SpanRange<T> {
    /// The range `0.1..=0.9` in steps of `0.1`.
    fn default() -> Self {
        let tenth = T::from(0.1).unwrap_or_else(T::one);
        Self {
            low: tenth,
            high: T::from(0.9).unwrap_or_else(T::one),
            step: tenth,
        }
    }
}

impl<T: Float> SpanRange<T> {
    /// Create a range.
    pub fn new(low: T, high: T, step: T) -> Self {
        Self { low, high, step }
    }

    /// Check the range constraints without generating the grid.
    pub fn validate(&self) -> Result<()> {
        Validator::validate_span_range(self.low, self.high, self.step)
    }

    /// Generate the span grid.
    pub fn grid(&self) -> Result<SpanGrid<T>> {
        SpanGrid::new(self.low, self.high, self.step)
    }
}
