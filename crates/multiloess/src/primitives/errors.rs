//! Error types for multi-span LOESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can stop a smoothing request:
//! invalid duration data, invalid span-grid parameters, invalid fitter inputs,
//! builder misuse and CSV boundary failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, indices, bounds).
//! * **Classified**: Every variant maps onto an [`ErrorKind`], so callers can tell
//!   invalid input from invalid ranges without matching every variant.
//! * **Terminal**: Any error aborts the whole request; there are no partial results.
//!
//! ## Non-goals
//!
//! * Degenerate neighborhoods are not errors; they are handled by the fitter and
//!   reported on the fitted curve.
//! * This module does not perform the validation itself (see `engine::validator`).

// External dependencies
use thiserror::Error;

/// Result type alias for multi-span LOESS operations.
pub type Result<T> = core::result::Result<T, MultiLoessError>;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`MultiLoessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The duration sequence or fitter inputs are unusable.
    InvalidInput,

    /// The span-grid parameters violate `0 < low <= high <= 1`, `step > 0`.
    InvalidRange,

    /// The data boundary (CSV source or sink) failed.
    Io,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for multi-span LOESS operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MultiLoessError {
    /// The duration sequence (or fitter input) is empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Local regression needs at least two points.
    #[error("Too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// `x` and `y` must have the same number of elements.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// A value is NaN or infinite.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A shot duration is negative.
    #[error("Negative duration at index {index}: {value}")]
    NegativeDuration {
        /// Position of the shot in screen order.
        index: usize,
        /// The offending duration.
        value: f64,
    },

    /// Durations sum to zero, so the running-time axis cannot be normalized.
    #[error("Total duration is zero; running time cannot be normalized")]
    ZeroTotalDuration,

    /// The abscissa is not sorted in non-decreasing order.
    #[error("Unsorted x-values: x[{index}] is smaller than its predecessor")]
    UnsortedInput {
        /// First index where the order is violated.
        index: usize,
    },

    /// Smoothing span must be in the range (0, 1].
    #[error("Invalid span: {0} (must be > 0 and <= 1)")]
    InvalidFraction(f64),

    /// Too many robustness iterations requested.
    #[error("Invalid iterations: {0} (must be in [0, 1000])")]
    InvalidIterations(usize),

    /// Span-grid bounds violate `0 < low <= high <= 1`.
    #[error("Invalid span range: low={low}, high={high} (need 0 < low <= high <= 1)")]
    InvalidRange {
        /// Lower span bound.
        low: f64,
        /// Upper span bound.
        high: f64,
    },

    /// Span-grid step must be positive and finite.
    #[error("Invalid step: {0} (must be > 0 and finite)")]
    InvalidStep(f64),

    /// The grid would contain more spans than allowed.
    #[error("Span grid too large: {got} spans (at most {max})")]
    GridTooLarge {
        /// Number of spans the parameters would produce.
        got: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// The span grid names a span for which no curve was supplied.
    #[error("No fitted curve for span {span}")]
    MissingCurve {
        /// The span without a curve.
        span: f64,
    },

    /// Color-bar tick spacing must be positive and finite.
    #[error("Invalid tick spacing: {0} (must be > 0 and finite)")]
    InvalidTickSpacing(f64),

    /// The requested data column does not exist in the source table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// A cell of the source table is not a number.
    #[error("Unparsable value '{value}' in column '{column}' at row {row}")]
    UnparsableValue {
        /// Column name.
        column: String,
        /// 1-based data row (header excluded).
        row: usize,
        /// Raw cell text.
        value: String,
    },

    /// Parameter was set multiple times in the builder.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Reading or writing CSV failed.
    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MultiLoessError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. }
            | Self::InvalidFraction(_)
            | Self::InvalidStep(_)
            | Self::GridTooLarge { .. }
            | Self::InvalidTickSpacing(_) => ErrorKind::InvalidRange,
            #[cfg(feature = "csv")]
            Self::Csv(_) => ErrorKind::Io,
            Self::Io(_) => ErrorKind::Io,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// `true` for errors in the duration data or fitter inputs.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// `true` for errors in the span-grid parameters.
    pub fn is_invalid_range(&self) -> bool {
        self.kind() == ErrorKind::InvalidRange
    }
}
