//! Aggregation of per-span curves into one long-form dataset.
//!
//! ## Purpose
//!
//! This module concatenates the fitted curves of a span grid into a flat table
//! of `{span, time, fitted}` records, the only artifact handed to rendering.
//!
//! ## Design notes
//!
//! * **Ordering**: span-major in grid order, then index-minor. The renderer's
//!   color ramp and legend rely on ascending spans.
//! * **Lookup**: curves are matched to grid spans by value, so the order in
//!   which (possibly parallel) fits finished does not matter.
//! * **Contiguity**: each span's records form one contiguous slice, so
//!   per-span queries need no copying.
//!
//! ## Invariants
//!
//! * `records.len() == spans.len() * points_per_span`.
//! * Within a span block, times follow the running-time axis.
//!
//! ## Non-goals
//!
//! * This module does not fit curves or draw anything.

// External dependencies
use core::fmt::{Debug, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::engine::output::FittedCurve;
use crate::evaluation::diagnostics::CurveDiagnostics;
use crate::primitives::errors::{MultiLoessError, Result};

// ============================================================================
// Records
// ============================================================================

/// One row of the long-form dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanRecord<T> {
    /// Span of the curve the row belongs to.
    pub span: T,

    /// Running time in percent.
    pub time: T,

    /// Fitted shot duration.
    pub fitted: T,
}

/// Long-form dataset of every fitted curve, grouped by span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregatedResult<T> {
    /// Records in span-major, index-minor order.
    pub records: Vec<SpanRecord<T>>,

    /// Spans in grid order.
    pub spans: Vec<T>,

    /// Number of points on each curve.
    pub points_per_span: usize,

    /// Total number of degenerate neighborhoods across all curves.
    pub degenerate_fits: usize,

    /// Per-span fit diagnostics, if requested.
    pub diagnostics: Option<Vec<CurveDiagnostics<T>>>,
}

// ============================================================================
// Aggregator
// ============================================================================

/// Combines per-span curves into an [`AggregatedResult`].
pub struct ResultAggregator;

impl ResultAggregator {
    /// Concatenate the curve of each grid span, tagging records by span.
    ///
    /// Fails if a grid span has no curve or a curve does not match `x`.
    pub fn aggregate<T: Float>(
        grid: &[T],
        x: &[T],
        curves: &[FittedCurve<T>],
    ) -> Result<AggregatedResult<T>> {
        let n = x.len();
        let mut records = Vec::with_capacity(grid.len() * n);
        let mut degenerate_fits = 0;

        for &span in grid {
            let curve = curves.iter().find(|c| c.span == span).ok_or_else(|| {
                MultiLoessError::MissingCurve {
                    span: span.to_f64().unwrap_or(f64::NAN),
                }
            })?;

            if curve.len() != n {
                return Err(MultiLoessError::MismatchedInputs {
                    x_len: n,
                    y_len: curve.len(),
                });
            }

            degenerate_fits += curve.degenerate.len();
            records.extend(x.iter().zip(&curve.fitted).map(|(&time, &fitted)| {
                SpanRecord { span, time, fitted }
            }));
        }

        Ok(AggregatedResult {
            records,
            spans: grid.to_vec(),
            points_per_span: n,
            degenerate_fits,
            diagnostics: None,
        })
    }
}

/// Aggregate the curves of `grid` over the axis `x`.
pub fn aggregate<T: Float>(
    grid: &[T],
    x: &[T],
    curves: &[FittedCurve<T>],
) -> Result<AggregatedResult<T>> {
    ResultAggregator::aggregate(grid, x, curves)
}

// ============================================================================
// Query Methods
// ============================================================================

impl<T: Float> AggregatedResult<T> {
    /// Total number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if there are no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in order.
    pub fn iter(&self) -> impl Iterator<Item = &SpanRecord<T>> {
        self.records.iter()
    }

    /// All records as one slice.
    pub fn records(&self) -> &[SpanRecord<T>] {
        &self.records
    }

    /// Spans in grid order.
    pub fn spans(&self) -> &[T] {
        &self.spans
    }

    /// Records of one span, if it is part of the result.
    pub fn curve(&self, span: T) -> Option<&[SpanRecord<T>]> {
        let pos = self.spans.iter().position(|&s| s == span)?;
        let start = pos * self.points_per_span;
        self.records.get(start..start + self.points_per_span)
    }

    /// Iterate over `(span, records)` blocks in grid order.
    pub fn curves(&self) -> impl Iterator<Item = (T, &[SpanRecord<T>])> {
        self.spans
            .iter()
            .copied()
            .zip(self.records.chunks(self.points_per_span.max(1)))
    }

    /// Smallest and largest span present.
    pub fn span_bounds(&self) -> Option<(T, T)> {
        let first = *self.spans.first()?;
        Some(self.spans.iter().fold((first, first), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        }))
    }

    /// Diagnostics of one span, if computed.
    pub fn diagnostics_for(&self, span: T) -> Option<&CurveDiagnostics<T>> {
        self.diagnostics.as_ref()?.iter().find(|d| d.span == span)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for AggregatedResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.points_per_span)?;
        writeln!(f, "  Spans:       {}", self.spans.len())?;
        if let Some((lo, hi)) = self.span_bounds() {
            writeln!(f, "  Span range:  {} to {}", lo, hi)?;
        }
        writeln!(f, "  Records:     {}", self.len())?;
        if self.degenerate_fits > 0 {
            writeln!(f, "  Degenerate:  {}", self.degenerate_fits)?;
        }
        writeln!(f)?;

        if let Some(diagnostics) = &self.diagnostics {
            writeln!(f, "Diagnostics:")?;
            writeln!(
                f,
                "{:>8} {:>12} {:>12} {:>12}",
                "Span", "RMSE", "MAE", "Roughness"
            )?;
            writeln!(f, "{:-<width$}", "", width = 47)?;
            for d in diagnostics {
                writeln!(f, "{}", d)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Fitted Data:")?;
        writeln!(f, "{:>8} {:>10} {:>12}", "Span", "Time", "Fitted")?;
        writeln!(f, "{:-<width$}", "", width = 32)?;

        // Show first 10 and last 10 rows if more than 20
        let n = self.records.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let r = &self.records[idx];
            writeln!(f, "{:>8.2} {:>10.2} {:>12.6}", r.span, r.time, r.fitted)?;
        }

        Ok(())
    }
}
