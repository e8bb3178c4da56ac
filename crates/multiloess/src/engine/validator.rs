//! Input validation for multi-span LOESS requests.
//!
//! Every check runs before any axis, grid or curve is computed, so a request
//! either fails up front with a single error or runs to completion.
//!
//! ## Checks
//!
//! * **Durations**: non-empty, finite, non-negative (the zero-total case is
//!   caught while building the axis).
//! * **Fitter inputs**: equal lengths, at least two points, finite values,
//!   non-decreasing abscissa.
//! * **Parameters**: span in `(0, 1]`, iteration limit, `0 < low <= high <= 1`
//!   with a positive finite step, positive tick spacing, builder duplicates.
//!
//! The first violation found is returned; cheaper checks run first.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{MultiLoessError, Result};

/// Largest number of robustness iterations accepted.
pub const MAX_ITERATIONS: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for multi-span LOESS configuration and input data.
///
/// All methods return `Result<()>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a shot-duration sequence: non-empty, finite, non-negative.
    pub fn validate_durations<T: Float>(durations: &[T]) -> Result<()> {
        if durations.is_empty() {
            return Err(MultiLoessError::EmptyInput);
        }

        for (i, &d) in durations.iter().enumerate() {
            if !d.is_finite() {
                return Err(MultiLoessError::InvalidNumericValue(format!(
                    "durations[{}]={}",
                    i,
                    d.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if d < T::zero() {
                return Err(MultiLoessError::NegativeDuration {
                    index: i,
                    value: d.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    /// Validate the `(x, y)` pair handed to the local regression fitter.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<()> {
        // Emptiness
        if x.is_empty() || y.is_empty() {
            return Err(MultiLoessError::EmptyInput);
        }

        // Lengths
        let n = x.len();
        if n != y.len() {
            return Err(MultiLoessError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // A line needs two points
        if n < 2 {
            return Err(MultiLoessError::TooFewPoints { got: n, min: 2 });
        }

        // Finiteness
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(MultiLoessError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(MultiLoessError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Order
        if let Some(i) = (1..n).find(|&i| x[i] < x[i - 1]) {
            return Err(MultiLoessError::UnsortedInput { index: i });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a smoothing span (fraction of points per neighborhood).
    pub fn validate_fraction<T: Float>(span: T) -> Result<()> {
        if !span.is_finite() || span <= T::zero() || span > T::one() {
            return Err(MultiLoessError::InvalidFraction(
                span.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of robustness iterations.
    ///
    /// 0 iterations means the initial fit only.
    pub fn validate_iterations(iterations: usize) -> Result<()> {
        if iterations > MAX_ITERATIONS {
            return Err(MultiLoessError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate span-grid parameters: `0 < low <= high <= 1`, `step > 0`.
    pub fn validate_span_range<T: Float>(low: T, high: T, step: T) -> Result<()> {
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        if !low.is_finite()
            || !high.is_finite()
            || low <= T::zero()
            || low > high
            || high > T::one()
        {
            return Err(MultiLoessError::InvalidRange {
                low: as_f64(low),
                high: as_f64(high),
            });
        }

        if !step.is_finite() || step <= T::zero() {
            return Err(MultiLoessError::InvalidStep(as_f64(step)));
        }

        Ok(())
    }

    /// Validate the color-bar tick spacing.
    pub fn validate_tick_spacing<T: Float>(tick: T) -> Result<()> {
        if !tick.is_finite() || tick <= T::zero() {
            return Err(MultiLoessError::InvalidTickSpacing(
                tick.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Report the first parameter a builder received twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<()> {
        match duplicate {
            Some(parameter) => Err(MultiLoessError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
