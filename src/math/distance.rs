//! Distances between centers and the global kernel bandwidth.
//!
//! ## Purpose
//!
//! This module provides the squared Euclidean distance used by the kernel and
//! the bandwidth estimator, which sets a single isotropic kernel width from
//! the spread of the (relaxed) centers.
//!
//! ## Key concepts
//!
//! * **Bandwidth**: Root-mean-square per-coordinate distance over all ordered
//!   pairs of distinct centers:
//!
//! ```text
//! varianz = sqrt( Σ_{i≠k} ‖c_i − c_k‖² / ((C − 1) · C · D) )
//! ```
//!
//! ## Invariants
//!
//! * Distances and the bandwidth are non-negative.
//! * The bandwidth is zero iff all centers coincide.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::centers::CenterSet;

/// Squared Euclidean distance between two equally sized points.
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
}

/// Average inter-center distance used as the kernel bandwidth.
///
/// Returns zero for fewer than two centers.
pub fn avdistance<T: Float>(centers: &CenterSet<T>) -> T {
    let n = centers.len();
    let dim = centers.dimension();
    if n < 2 || dim == 0 {
        return T::zero();
    }

    let mut dist = T::zero();
    for (i, ci) in centers.iter().enumerate() {
        for (k, ck) in centers.iter().enumerate() {
            if i != k {
                dist = dist + squared_euclidean(ci, ck);
            }
        }
    }

    let pairs = T::from(n - 1).unwrap_or(T::one());
    let count = T::from(n).unwrap_or(T::one());
    let dims = T::from(dim).unwrap_or(T::one());
    (dist / pairs / count / dims).sqrt()
}
