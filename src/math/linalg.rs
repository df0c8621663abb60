//! Linear algebra backend for the RBF normal equations.
//!
//! ## Purpose
//!
//! This module solves the small dense symmetric system `A · c = b` produced by
//! the fitter, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Tries a Cholesky factorization first; the Gram matrix of kernel responses
//!   is symmetric positive semi-definite and usually definite.
//! * Falls back to LU with partial pivoting when Cholesky fails.
//! * Reports `None` when an LU pivot is negligible against the largest one
//!   (`|u_ii| <= eps · n · max |u_jj|`). The threshold is loose: Gaussian Gram
//!   matrices are routinely ill-conditioned while still giving a good fit.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the symmetric `n x n` system `a · x = b`.
    ///
    /// `a` holds `n * n` entries; since it is symmetric, row- and column-major
    /// layouts coincide.
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    macro_rules! solve_symmetric_impl {
        ($name:ident, $t:ty) => {
            /// Solve a symmetric system with Cholesky, falling back to pivoted LU.
            pub fn $name(a: &[$t], b: &[$t], n: usize) -> Option<Vec<$t>> {
                if n == 0 || a.len() != n * n || b.len() != n {
                    return None;
                }

                let matrix = DMatrix::from_column_slice(n, n, a);
                let rhs = DVector::from_column_slice(b);

                if let Some(chol) = matrix.clone().cholesky() {
                    let solution = chol.solve(&rhs);
                    if solution.iter().all(|v| v.is_finite()) {
                        return Some(solution.as_slice().to_vec());
                    }
                }

                log::debug!("Cholesky failed on {n}x{n} system, falling back to LU");

                let lu = matrix.lu();
                let pivots = lu.u().diagonal();
                let largest = pivots.iter().fold(0.0 as $t, |acc, p| acc.max(p.abs()));
                let tolerance = <$t>::EPSILON * n as $t * largest;
                if largest == 0.0 || pivots.iter().any(|p| p.abs() <= tolerance) {
                    log::debug!("Rank-deficient {n}x{n} system, largest pivot {largest:e}");
                    return None;
                }

                lu.solve(&rhs).map(|s: DVector<$t>| s.as_slice().to_vec())
            }
        };
    }

    solve_symmetric_impl!(solve_symmetric_f64, f64);
    solve_symmetric_impl!(solve_symmetric_f32, f32);
}
