//! Least-squares fit of the RBF output weights.
//!
//! ## Purpose
//!
//! This module builds and solves the normal equations for one bias term plus
//! one weight per center. Every complete delay vector whose `step`-ahead target
//! still lies inside the training prefix contributes one row.
//!
//! ## Design notes
//!
//! * **Lower triangle only**: Each training point updates the lower triangle,
//!   which is mirrored once at the end.
//! * **Averaged system**: Gram matrix and right-hand side are divided by the
//!   number of training points before solving.
//! * **Specialized accumulation**: `FitLinalg` selects a SIMD path for `f64`.
//! * **Workspace reuse**: All scratch lives in a caller-owned `FitBuffer`.
//!
//! ## Key concepts
//!
//! * **Regressors**: `h = (1, rbf(x(n), c_1), ..., rbf(x(n), c_C))`.
//! * **Training range**: `n = (D−1)·L ..= insample − step − 1`, target `s[n + step]`.
//!
//! ```text
//! A = (1/N) Σ_n h(n) h(n)ᵀ,   b = (1/N) Σ_n h(n) · s[n + step]
//! ```
//!
//! ## Invariants
//!
//! * Returned coefficients are finite and number `C + 1`, bias first.
//!
//! ## Non-goals
//!
//! * This module does not place centers or choose the bandwidth.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::centers::CenterSet;
use crate::primitives::embedding::EmbeddedView;
use crate::primitives::errors::RbfError;

/// Scalar and SIMD Gram accumulators.
pub mod accumulators;

/// Implementations of `FitLinalg` for f32 and f64.
pub mod impls;

// ============================================================================
// FitLinalg Trait
// ============================================================================

/// Float types the fitter can accumulate and solve with.
pub trait FitLinalg: FloatLinalg {
    /// Add one training point to the lower triangle of the normal equations.
    fn accumulate_lower(
        gram: &mut [Self],
        rhs: &mut [Self],
        responses: &[Self],
        target: Self,
        order: usize,
    );
}

// ============================================================================
// Fitter
// ============================================================================

/// Solved output layer of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome<T> {
    /// Bias followed by one weight per center.
    pub coefficients: Vec<T>,
    /// Number of training points that entered the normal equations.
    pub training_points: usize,
}

/// Normal-equations fitter.
pub struct Fitter;

impl Fitter {
    /// Number of training points for a prefix of length `insample`.
    #[inline]
    pub fn training_points(window: usize, step: usize, insample: usize) -> usize {
        insample.saturating_sub(step).saturating_sub(window)
    }

    /// Fit the output weights on the first `insample` points of `view`.
    pub fn fit<T: FitLinalg>(
        view: &EmbeddedView<'_, T>,
        centers: &CenterSet<T>,
        kernel: &GaussianKernel<T>,
        step: usize,
        insample: usize,
        buffer: &mut FitBuffer<T>,
    ) -> Result<FitOutcome<T>, RbfError> {
        let window = view.window();
        let count = Self::training_points(window, step, insample);
        if count == 0 || insample > view.len() {
            return Err(RbfError::InvalidInsample {
                got: insample,
                min: window + step + 1,
            });
        }

        buffer.prepare(centers.len());
        let order = buffer.order();

        // Fewer equations than unknowns
        if count < order {
            return Err(RbfError::SingularSystem { size: order });
        }

        for n in window..window + count {
            for (h, center) in buffer.responses[1..].iter_mut().zip(centers.iter()) {
                *h = kernel.rbf(view, n, center);
            }
            let target = view.value(n + step);
            T::accumulate_lower(
                &mut buffer.gram,
                &mut buffer.rhs,
                &buffer.responses,
                target,
                order,
            );
        }

        buffer.scale(T::from(count).unwrap_or(T::one()));
        buffer.mirror_lower();

        let coefficients = T::solve_symmetric(&buffer.gram, &buffer.rhs, order)
            .ok_or(RbfError::SingularSystem { size: order })?;

        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(RbfError::NumericDegeneracy(format!(
                "non-finite coefficient in {order}x{order} solve"
            )));
        }

        Ok(FitOutcome {
            coefficients,
            training_points: count,
        })
    }
}
