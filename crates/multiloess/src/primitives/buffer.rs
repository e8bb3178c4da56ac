//! Reusable working memory for a single-span fit.
//!
//! ## Purpose
//!
//! A span's fit runs one smoothing pass per robustness iteration. The buffers
//! here are allocated once per span and recycled across passes, so the inner
//! loops never allocate.
//!
//! ## Invariants
//!
//! * After `prepare(n)`, every slot has length `n`.
//! * Robustness weights start at 1.0 for every point.
//!
//! ## Non-goals
//!
//! * Sharing between spans. Parallel span fits each own a buffer.

// External dependencies
use num_traits::Float;

/// Working memory for the per-span executor.
#[derive(Debug, Clone, Default)]
pub struct FitBuffer<T> {
    /// Smoothed values of the current pass.
    pub fitted: Vec<T>,

    /// Kernel (and combined) weights of the current neighborhood.
    pub weights: Vec<T>,

    /// Residuals `y - fitted` of the previous pass.
    pub residuals: Vec<T>,

    /// Robustness weights carried into the next pass.
    pub robustness_weights: Vec<T>,

    /// Scratch space for median selection.
    pub scratch: Vec<T>,
}

impl<T: Float> FitBuffer<T> {
    /// Create a buffer with room for `n` points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            fitted: Vec::with_capacity(n),
            weights: Vec::with_capacity(n),
            residuals: Vec::with_capacity(n),
            robustness_weights: Vec::with_capacity(n),
            scratch: Vec::with_capacity(n),
        }
    }

    /// Reset every slot to length `n` for a fresh fit.
    pub fn prepare(&mut self, n: usize) {
        Self::reset(&mut self.fitted, n, T::zero());
        Self::reset(&mut self.weights, n, T::zero());
        Self::reset(&mut self.residuals, n, T::zero());
        Self::reset(&mut self.robustness_weights, n, T::one());
        Self::reset(&mut self.scratch, n, T::zero());
    }

    #[inline]
    fn reset(slot: &mut Vec<T>, n: usize, value: T) {
        slot.clear();
        slot.resize(n, value);
    }
}
