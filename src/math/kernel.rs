//! Gaussian radial basis kernel.
//!
//! ## Purpose
//!
//! This module evaluates the response of a center to a delay vector:
//!
//! ```text
//! rbf(x, c) = exp(−‖x − c‖² / (2 · varianz²))
//! ```
//!
//! with one bandwidth shared by all centers. It is the hot path of both the
//! fit (one call per center and training point) and the forecast.
//!
//! ## Design notes
//!
//! * **Allocation-free**: The delay vector is read in place through `EmbeddedView`.
//! * **Precomputed denominator**: `2 · varianz²` is computed once per kernel.
//!
//! ## Invariants
//!
//! * For a positive finite bandwidth the response is in `[0, 1]`, exactly 1 iff
//!   `x == c`; it is strictly positive unless `exp` underflows.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::embedding::EmbeddedView;

/// Isotropic Gaussian kernel with a fixed bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    bandwidth: T,
    denom: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel for the given bandwidth (`varianz`).
    pub fn new(bandwidth: T) -> Self {
        let two = T::one() + T::one();
        Self {
            bandwidth,
            denom: two * bandwidth * bandwidth,
        }
    }

    /// The bandwidth this kernel was built with.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Response of `center` to the delay vector at index `n` of `view`.
    #[inline]
    pub fn rbf(&self, view: &EmbeddedView<'_, T>, n: usize, center: &[T]) -> T {
        debug_assert_eq!(center.len(), view.dimension());
        let r = center
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, &c)| {
                let diff = view.coordinate(n, j) - c;
                acc + diff * diff
            });
        (-r / self.denom).exp()
    }
}
