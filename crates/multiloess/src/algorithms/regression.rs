//! Local weighted linear regression.
//!
//! ## Purpose
//!
//! This module fits a degree-1 polynomial to one neighborhood by weighted least
//! squares and evaluates it at the query point. It also decides what to return
//! when the neighborhood cannot support a line.
//!
//! ## Design notes
//!
//! * Moments are accumulated relative to the query point, so the prediction is
//!   the intercept of the centered fit and stays accurate far from the origin.
//! * A neighborhood whose weighted x-variance vanishes is degenerate: the fit
//!   falls back to the weighted mean of y and flags the estimate.
//! * A neighborhood whose weights all vanish (possible after robustness
//!   reweighting) follows the [`ZeroWeightFallback`] policy.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::compute_window_weights;
use crate::primitives::window::Window;

/// Relative tolerance below which the weighted x-variance counts as zero.
const SINGULAR_TOLERANCE: f64 = 1e-10;

// ============================================================================
// Zero-Weight Fallback Policy
// ============================================================================

/// Policy for neighborhoods whose combined weights are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWeightFallback {
    /// Unweighted mean of y over the neighborhood (default).
    #[default]
    UseLocalMean,

    /// The observed y-value at the query point.
    ReturnOriginal,
}

// ============================================================================
// LinearFit
// ============================================================================

/// Weighted linear fit in coordinates centered on the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1).
    pub slope: T,

    /// Intercept (beta_0) at the centering point.
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the response at offset `dx` from the centering point.
    #[inline]
    pub fn predict(&self, dx: T) -> T {
        self.intercept + self.slope * dx
    }

    /// Fit weighted least squares of `y` on `x - center`.
    ///
    /// Returns `None` when the weights sum to zero or the weighted x-variance
    /// is numerically zero.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], center: T, bandwidth: T) -> Option<Self> {
        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();

        for ((&xj, &yj), &w) in x.iter().zip(y).zip(weights) {
            sum_w = sum_w + w;
            sum_wx = sum_wx + w * (xj - center);
            sum_wy = sum_wy + w * yj;
        }

        if sum_w <= T::zero() {
            return None;
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;

        // Second pass on deviations from the weighted means
        let mut variance = T::zero();
        let mut covariance = T::zero();
        for ((&xj, &yj), &w) in x.iter().zip(y).zip(weights) {
            let dx = xj - center - x_mean;
            variance = variance + w * dx * dx;
            covariance = covariance + w * dx * (yj - y_mean);
        }

        let tol = T::from(SINGULAR_TOLERANCE).unwrap_or_else(T::epsilon)
            * sum_w
            * bandwidth
            * bandwidth;
        if variance <= tol {
            return None;
        }

        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }
}

/// Weighted mean of `y`, or `None` when the weights sum to zero.
#[inline]
pub fn weighted_mean<T: Float>(y: &[T], weights: &[T]) -> Option<T> {
    let (sum_w, sum_wy) = y
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(sw, swy), (&yj, &w)| {
            (sw + w, swy + w * yj)
        });
    if sum_w > T::zero() {
        Some(sum_wy / sum_w)
    } else {
        None
    }
}

// ============================================================================
// Local Estimate
// ============================================================================

/// Smoothed value at one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalEstimate<T> {
    /// Fitted value.
    pub value: T,

    /// `true` if the value came from a fallback instead of a line fit.
    pub degenerate: bool,
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to fit a single query point.
pub struct RegressionContext<'a, T> {
    /// Sorted x-values (independent variable).
    pub x: &'a [T],

    /// y-values (dependent variable).
    pub y: &'a [T],

    /// Index of the query point.
    pub idx: usize,

    /// Nearest-neighbor window around the query point.
    pub window: Window,

    /// Whether to multiply robustness weights into the kernel weights.
    pub use_robustness: bool,

    /// Robustness weights (all 1.0 before the first robustness pass).
    pub robustness_weights: &'a [T],

    /// Scratch slice receiving the combined weights.
    pub weights: &'a mut [T],

    /// Zero-weight fallback policy.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: Float> RegressionContext<'_, T> {
    /// Fit the local line and evaluate it at the query point.
    pub fn fit(&mut self) -> LocalEstimate<T> {
        let Window { left, right } = self.window;
        let x_current = self.x[self.idx];
        let bandwidth = self.window.max_distance(self.x, x_current);

        compute_window_weights(self.x, left, right, x_current, bandwidth, self.weights);

        if self.use_robustness {
            for j in left..=right {
                self.weights[j] = self.weights[j] * self.robustness_weights[j];
            }
        }

        let xs = &self.x[left..=right];
        let ys = &self.y[left..=right];
        let ws = &self.weights[left..=right];

        if let Some(model) = LinearFit::fit_wls(xs, ys, ws, x_current, bandwidth) {
            return LocalEstimate {
                value: model.predict(T::zero()),
                degenerate: false,
            };
        }

        let value = weighted_mean(ys, ws).unwrap_or_else(|| match self.zero_weight_fallback {
            ZeroWeightFallback::UseLocalMean => {
                let cnt = T::from(ys.len()).unwrap_or_else(T::one);
                ys.iter().fold(T::zero(), |acc, &v| acc + v) / cnt
            }
            ZeroWeightFallback::ReturnOriginal => self.y[self.idx],
        });

        LocalEstimate {
            value,
            degenerate: true,
        }
    }
}
