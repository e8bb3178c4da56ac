#![cfg(feature = "dev")]
//! Tests for input and parameter validation.
//!
//! ## Test Organization
//!
//! 1. **Durations** - Empty, non-finite, negative
//! 2. **Fitter Inputs** - Lengths, finiteness, ordering
//! 3. **Parameters** - Span, iterations, range, ticks, duplicates

use multiloess::internals::engine::validator::{MAX_ITERATIONS, Validator};
use multiloess::internals::primitives::errors::{ErrorKind, MultiLoessError};

// ============================================================================
// Duration Validation Tests
// ============================================================================

/// Test valid durations, including zero-length shots.
#[test]
fn test_validate_durations_valid() {
    assert!(Validator::validate_durations(&[1.0f64, 0.0, 2.5]).is_ok());
}

/// Test invalid duration sequences.
#[test]
fn test_validate_durations_invalid() {
    assert!(matches!(
        Validator::validate_durations::<f64>(&[]),
        Err(MultiLoessError::EmptyInput)
    ));
    assert!(matches!(
        Validator::validate_durations(&[1.0f64, f64::NAN]),
        Err(MultiLoessError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_durations(&[1.0f64, 2.0, -0.5]),
        Err(MultiLoessError::NegativeDuration { index: 2, .. })
    ));
}

// ============================================================================
// Fitter Input Validation Tests
// ============================================================================

/// Test the checks on `(x, y)` in order.
#[test]
fn test_validate_inputs() {
    let ok = [1.0f64, 2.0, 2.0, 3.0];
    assert!(Validator::validate_inputs(&ok, &ok).is_ok());

    assert!(matches!(
        Validator::validate_inputs::<f64>(&[], &[]),
        Err(MultiLoessError::EmptyInput)
    ));
    assert!(matches!(
        Validator::validate_inputs(&ok, &ok[..3]),
        Err(MultiLoessError::MismatchedInputs { x_len: 4, y_len: 3 })
    ));
    assert!(matches!(
        Validator::validate_inputs(&[1.0f64], &[1.0]),
        Err(MultiLoessError::TooFewPoints { got: 1, min: 2 })
    ));
    assert!(matches!(
        Validator::validate_inputs(&[1.0f64, f64::INFINITY], &[1.0, 2.0]),
        Err(MultiLoessError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_inputs(&[1.0f64, 2.0], &[1.0, f64::NAN]),
        Err(MultiLoessError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_inputs(&[1.0f64, 3.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(MultiLoessError::UnsortedInput { index: 2 })
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test span bounds `(0, 1]`.
#[test]
fn test_validate_fraction() {
    assert!(Validator::validate_fraction(1.0f64).is_ok());
    assert!(Validator::validate_fraction(0.01f64).is_ok());

    for span in [0.0f64, -0.2, 1.01, f64::NAN] {
        let err = Validator::validate_fraction(span).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }
}

/// Test the iteration limit.
#[test]
fn test_validate_iterations() {
    assert!(Validator::validate_iterations(0).is_ok());
    assert!(Validator::validate_iterations(MAX_ITERATIONS).is_ok());
    assert!(matches!(
        Validator::validate_iterations(MAX_ITERATIONS + 1),
        Err(MultiLoessError::InvalidIterations(_))
    ));
}

/// Test span range constraints.
#[test]
fn test_validate_span_range() {
    assert!(Validator::validate_span_range(0.1f64, 0.9, 0.1).is_ok());
    assert!(Validator::validate_span_range(1.0f64, 1.0, 5.0).is_ok());

    assert!(matches!(
        Validator::validate_span_range(0.0f64, 0.9, 0.1),
        Err(MultiLoessError::InvalidRange { .. })
    ));
    assert!(matches!(
        Validator::validate_span_range(0.5f64, 0.4, 0.1),
        Err(MultiLoessError::InvalidRange { .. })
    ));
    assert!(matches!(
        Validator::validate_span_range(0.5f64, 1.1, 0.1),
        Err(MultiLoessError::InvalidRange { .. })
    ));
    assert!(matches!(
        Validator::validate_span_range(0.1f64, 0.9, f64::INFINITY),
        Err(MultiLoessError::InvalidStep(_))
    ));
}

/// Test tick spacing and duplicate checks.
#[test]
fn test_validate_ticks_and_duplicates() {
    assert!(Validator::validate_tick_spacing(0.05f64).is_ok());
    assert!(matches!(
        Validator::validate_tick_spacing(0.0f64),
        Err(MultiLoessError::InvalidTickSpacing(_))
    ));

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert!(matches!(
        Validator::validate_no_duplicates(Some("step")),
        Err(MultiLoessError::DuplicateParameter { parameter: "step" })
    ));
}
