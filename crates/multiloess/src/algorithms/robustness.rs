//! Bisquare robustness weights for outlier downweighting.
//!
//! ## Purpose
//!
//! After a smoothing pass, residuals are turned into weights that shrink the
//! influence of points far from the curve on the next pass.
//!
//! ## Key concepts
//!
//! * **Scale**: median absolute residual; the mean absolute residual stands in
//!   when the median is (near) zero.
//! * **Bisquare**: `w = (1 - (r / 6s)^2)^2` for `|r| < 6s`, else 0, with the
//!   Cleveland (1979) plateaus near zero and near the cutoff.
//!
//! ## Invariants
//!
//! * Robustness weights are in `[0, 1]`.
//! * All-zero residuals give weights of exactly 1. So does a scale at or
//!   below `MIN_SCALE`, which is rounding noise of an exact fit.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::{mean_absolute, median_absolute};

/// Bisquare tuning constant applied to the residual scale.
pub const BISQUARE_C: f64 = 6.0;

/// Relative floor of the median scale against the mean absolute residual.
const SCALE_THRESHOLD: f64 = 1e-7;

/// Absolute floor of any scale estimate.
const MIN_SCALE: f64 = 1e-12;

/// Robust residual scale: median absolute residual with mean fallback.
///
/// Returns zero only if every residual is zero.
pub fn residual_scale<T: Float>(residuals: &[T], scratch: &mut [T]) -> T {
    scratch.copy_from_slice(residuals);
    let median = median_absolute(scratch);
    let mean = mean_absolute(residuals);

    let threshold = (T::from(SCALE_THRESHOLD).unwrap_or_else(T::zero) * mean)
        .max(T::from(MIN_SCALE).unwrap_or_else(T::zero));

    if median <= threshold {
        mean.max(median)
    } else {
        median
    }
}

/// Bisquare weight of one residual for a given tuned scale `cmad = 6s`.
#[inline]
pub fn bisquare_weight<T: Float>(residual: T, cmad: T) -> T {
    let c1 = T::from(0.001).unwrap_or_else(T::zero) * cmad;
    let c9 = T::from(0.999).unwrap_or_else(T::one) * cmad;

    let r = residual.abs();
    if r <= c1 {
        T::one()
    } else if r <= c9 {
        let u = r / cmad;
        let tmp = T::one() - u * u;
        tmp * tmp
    } else {
        T::zero()
    }
}

/// Overwrite `weights` with bisquare robustness weights for `residuals`.
pub fn apply_robustness_weights<T: Float>(residuals: &[T], weights: &mut [T], scratch: &mut [T]) {
    if residuals.is_empty() {
        return;
    }

    let scale = residual_scale(residuals, scratch);
    if scale <= T::from(MIN_SCALE).unwrap_or_else(T::zero) {
        // Perfect fit
        weights.iter_mut().for_each(|w| *w = T::one());
        return;
    }

    let cmad = T::from(BISQUARE_C).unwrap_or_else(T::one) * scale;
    for (w, &r) in weights.iter_mut().zip(residuals) {
        *w = bisquare_weight(r, cmad);
    }
}
