//! Fit-quality diagnostics for a single span.
//!
//! ## Purpose
//!
//! Summarizes how closely each curve follows the shot durations and how much
//! local variation it keeps, which helps choose the informative spans before
//! any formal bandwidth selection.
//!
//! ## Key concepts
//!
//! * **RMSE / MAE**: root-mean-square and mean absolute residual `y - fitted`.
//! * **Roughness**: sum of absolute second differences of the fitted values.
//!   Larger spans give smoother curves and smaller roughness.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

/// Diagnostic metrics of one fitted curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveDiagnostics<T> {
    /// Span of the curve.
    pub span: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Mean absolute residual.
    pub mae: T,

    /// Sum of absolute second differences of the fitted values.
    pub roughness: T,
}

impl<T: Float> CurveDiagnostics<T> {
    /// Compute diagnostics for `fitted` against the observed `y`.
    pub fn compute(span: T, y: &[T], fitted: &[T]) -> Self {
        let n = y.len().min(fitted.len());
        if n == 0 {
            return Self {
                span,
                rmse: T::zero(),
                mae: T::zero(),
                roughness: T::zero(),
            };
        }

        let (sum_sq, sum_abs) = y
            .iter()
            .zip(fitted)
            .fold((T::zero(), T::zero()), |(sq, ab), (&yi, &fi)| {
                let r = yi - fi;
                (sq + r * r, ab + r.abs())
            });
        let n_t = T::from(n).unwrap_or_else(T::one);

        Self {
            span,
            rmse: (sum_sq / n_t).sqrt(),
            mae: sum_abs / n_t,
            roughness: roughness(fitted),
        }
    }
}

/// Sum of absolute second differences `|v[i+1] - 2 v[i] + v[i-1]|`.
pub fn roughness<T: Float>(values: &[T]) -> T {
    values.windows(3).fold(T::zero(), |acc, w| {
        acc + (w[2] - w[1] - (w[1] - w[0])).abs()
    })
}

impl<T: Float + Display> Display for CurveDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
            self.span, self.rmse, self.mae, self.roughness
        )
    }
}
