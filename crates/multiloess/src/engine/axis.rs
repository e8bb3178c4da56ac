//! Running-time axis construction.
//!
//! Converts shot durations in screen order into the cumulative share of the
//! film's running time, expressed in percent. The last shot always ends at
//! exactly 100.

// External dependencies
use core::ops::Deref;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::{MultiLoessError, Result};

/// Cumulative running time of each shot, rescaled to `(0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis<T>(Vec<T>);

impl<T: Float> TimeAxis<T> {
    /// Build the axis from shot durations.
    ///
    /// Fails if the sequence is empty, holds negative or non-finite values,
    /// or sums to zero.
    pub fn from_durations(durations: &[T]) -> Result<Self> {
        Validator::validate_durations(durations)?;

        let mut running = T::zero();
        let cumulative: Vec<T> = durations
            .iter()
            .map(|&d| {
                running = running + d;
                running
            })
            .collect();

        let total = running;
        if total <= T::zero() {
            return Err(MultiLoessError::ZeroTotalDuration);
        }

        // Divide before scaling so the last value is exactly 100
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        let axis = cumulative.into_iter().map(|c| c / total * hundred).collect();

        Ok(Self(axis))
    }

    /// View the axis as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consume the axis into its values.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for TimeAxis<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// Build the running-time axis for a duration sequence.
pub fn build_time_axis<T: Float>(durations: &[T]) -> Result<TimeAxis<T>> {
    TimeAxis::from_durations(durations)
}
