//! Robust scale estimation of residuals.
//!
//! The robustness step measures residual scale with the median absolute
//! residual, falling back to the mean absolute residual when more than half
//! the residuals vanish.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Median Absolute Residual `median(|r|)`, computed in place.
pub fn median_absolute<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    for val in vals.iter_mut() {
        *val = val.abs();
    }

    median_inplace(vals)
}

// Mean Absolute Residual `mean(|r|)`.
pub fn mean_absolute<T: Float>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let n = T::from(vals.len()).unwrap_or_else(T::one);
    vals.iter().fold(T::zero(), |acc, v| acc + v.abs()) / n
}

// Median by quickselect; reorders `vals`.
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return upper;
    }

    // Even length: the lower middle is the largest value left of `mid`
    let lower = vals[..mid]
        .iter()
        .copied()
        .fold(vals[0], |acc, v| if v > acc { v } else { acc });

    (lower + upper) / (T::one() + T::one())
}
