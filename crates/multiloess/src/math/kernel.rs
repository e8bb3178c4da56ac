//! Tricube kernel weights for local regression.
//!
//! ## Purpose
//!
//! Maps the distance of each neighbor from the query point onto a weight that
//! is largest at the query point and tapers to zero at the neighborhood
//! boundary.
//!
//! ## Key concepts
//!
//! * **Normalized distance**: `u = |x_j - x_i| / h`, where `h` is the distance
//!   to the farthest selected neighbor.
//! * **Tricube**: `K(u) = (1 - u^3)^3` for `u < 1`, and `0` otherwise.
//!
//! ## Invariants
//!
//! * Weights lie in `[0, 1]`; `K(0) = 1`.
//! * The farthest neighbor (`u = 1`) receives weight zero.

// External dependencies
use num_traits::Float;

/// Bandwidth substituted when every neighbor coincides with the query point.
pub const MIN_BANDWIDTH: f64 = 1e-12;

/// Tricube kernel `K(u) = (1 - |u|^3)^3` on `|u| < 1`.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Guard a bandwidth against zero.
#[inline]
pub fn effective_bandwidth<T: Float>(bandwidth: T) -> T {
    let min = T::from(MIN_BANDWIDTH).unwrap_or_else(T::epsilon);
    if bandwidth > min { bandwidth } else { min }
}

/// Fill `weights[left..=right]` with tricube weights around `x_current`.
///
/// Returns the sum of the weights written.
pub fn compute_window_weights<T: Float>(
    x: &[T],
    left: usize,
    right: usize,
    x_current: T,
    bandwidth: T,
    weights: &mut [T],
) -> T {
    if left > right || right >= x.len() {
        return T::zero();
    }

    let h = effective_bandwidth(bandwidth);
    let mut sum = T::zero();

    for j in left..=right {
        let w = tricube((x[j] - x_current).abs() / h);
        weights[j] = w;
        sum = sum + w;
    }

    sum
}
