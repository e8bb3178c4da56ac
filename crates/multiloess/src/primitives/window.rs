//! Nearest-neighbor windows over a sorted axis.
//!
//! Each local fit uses the `k` points closest to its query point. On a sorted
//! axis those points form a contiguous run `[left, right]`, and the run only
//! moves forward as the query point advances, so one pass over every query
//! point costs O(n) window moves.

// External dependencies
use num_traits::Float;

// Contiguous run of neighbors, both bounds inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // First neighbor.
    pub left: usize,

    // Last neighbor.
    pub right: usize,
}

impl Window {
    // Run of `window_size` points around `idx`, shifted to fit in `[0, n)`.
    #[inline]
    pub fn initialize(idx: usize, window_size: usize, n: usize) -> Self {
        debug_assert!(window_size >= 1, "window must hold at least one point");

        if window_size >= n {
            return Self {
                left: 0,
                right: n.saturating_sub(1),
            };
        }

        let left = idx.saturating_sub(window_size / 2).min(n - window_size);
        Self {
            left,
            right: left + window_size - 1,
        }
    }

    // Move the run until it holds the neighbors of `x[current]`.
    //
    // Moving right needs a strictly closer candidate; moving left also
    // happens on a tie, so equidistant neighbors keep the lower index.
    #[inline]
    pub fn recenter<T: Float>(&mut self, x: &[T], current: usize, n: usize) {
        debug_assert!(current < n, "query index out of bounds");

        let last = n - 1;
        self.left = self.left.min(last);
        self.right = self.right.min(last);

        let xc = x[current];
        while self.right < last && x[self.right + 1] - xc < xc - x[self.left] {
            self.shift(true);
        }
        while self.left > 0 && xc - x[self.left - 1] <= x[self.right] - xc {
            self.shift(false);
        }
    }

    #[inline]
    fn shift(&mut self, forward: bool) {
        if forward {
            self.left += 1;
            self.right += 1;
        } else {
            self.left -= 1;
            self.right -= 1;
        }
    }

    // Bandwidth: distance from `x_current` to the farther end of the run.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], x_current: T) -> T {
        (x_current - x[self.left]).max(x[self.right] - x_current)
    }

    // Neighborhood size `k = ceil(span * n)`, clamped to `[2, n]`.
    #[inline]
    pub fn calculate_span<T: Float>(n: usize, span: T) -> usize {
        // Absorb representation error such as 0.3 * 10 = 3.0000000000000004
        let epsilon = T::from(1e-9).unwrap_or_else(T::epsilon);
        let span_n = (span * T::from(n).unwrap_or_else(T::zero) - epsilon).ceil();
        let k = span_n.to_usize().unwrap_or(0);
        k.clamp(2, n.max(2))
    }

    // Number of points in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}
