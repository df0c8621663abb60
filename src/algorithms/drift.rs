//! Drift relaxation of the RBF centers.
//!
//! ## Purpose
//!
//! Evenly spaced centers can still cluster in embedding space when the series
//! revisits the same region. This module spreads them with a fixed number of
//! electrostatic-style repulsion sweeps.
//!
//! ## Design notes
//!
//! * **Sequential sweep**: Centers are updated in place one after another, so
//!   later centers in a sweep see the already moved earlier ones.
//! * **Unit step**: The force on a center is rescaled to length [`DRIFT_STEP`].
//! * **Coordinate-wise containment**: A coordinate only moves if it stays
//!   strictly inside `(DRIFT_LOWER, DRIFT_UPPER)`.
//! * **Coincident pairs**: A zero coordinate difference contributes no force.
//!   A center with zero net force is left where it is.
//!
//! ## Key concepts
//!
//! * **Force**: Per coordinate `j`, the force on center `i` is
//!
//! ```text
//! F_j = Σ_{k≠i} sign(c_ij − c_kj) / |c_ij − c_kj|
//! ```
//!
//! ## Invariants
//!
//! * Every coordinate inside `[DRIFT_LOWER, DRIFT_UPPER]` before relaxation is
//!   still inside afterwards.
//! * Deterministic for a given initial center set.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::centers::CenterSet;

/// Number of relaxation sweeps.
pub const DRIFT_ITERATIONS: usize = 20;

/// Length of one relaxation move in normalized units.
pub const DRIFT_STEP: f64 = 0.01;

/// Exclusive lower bound of the padded unit box.
pub const DRIFT_LOWER: f64 = -0.1;

/// Exclusive upper bound of the padded unit box.
pub const DRIFT_UPPER: f64 = 1.1;

// ============================================================================
// Drift Relaxer
// ============================================================================

/// Summary of one relaxation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriftReport {
    /// Coordinate pairs skipped because they coincided.
    pub coincident_skips: usize,
    /// Moves skipped because the net force on a center vanished.
    pub stalled_moves: usize,
}

/// Pairwise repulsion of centers inside the padded unit box.
pub struct DriftRelaxer;

impl DriftRelaxer {
    /// Run [`DRIFT_ITERATIONS`] sweeps over `centers`.
    pub fn relax<T: Float>(centers: &mut CenterSet<T>) -> DriftReport {
        Self::relax_with(centers, DRIFT_ITERATIONS)
    }

    /// Run `iterations` sweeps over `centers`.
    pub fn relax_with<T: Float>(centers: &mut CenterSet<T>, iterations: usize) -> DriftReport {
        let mut report = DriftReport::default();
        let n = centers.len();
        let dim = centers.dimension();
        if n < 2 || dim == 0 {
            return report;
        }

        let step_len = T::from(DRIFT_STEP).unwrap_or(T::zero());
        let lower = T::from(DRIFT_LOWER).unwrap_or(T::zero());
        let upper = T::from(DRIFT_UPPER).unwrap_or(T::one());

        // Reused per center: one force component per coordinate.
        let mut force = vec![T::zero(); dim];

        for _ in 0..iterations {
            for i in 0..n {
                force.iter_mut().for_each(|f| *f = T::zero());

                for k in 0..n {
                    if k == i {
                        continue;
                    }
                    let (ci, ck) = (centers.center(i), centers.center(k));
                    for (f, (&a, &b)) in force.iter_mut().zip(ci.iter().zip(ck.iter())) {
                        let h = a - b;
                        if h == T::zero() {
                            report.coincident_skips += 1;
                            continue;
                        }
                        *f = *f + h.signum() / h.abs();
                    }
                }

                let norm = force
                    .iter()
                    .fold(T::zero(), |acc, &f| acc + f * f)
                    .sqrt();
                if norm == T::zero() || !norm.is_finite() {
                    report.stalled_moves += 1;
                    continue;
                }

                let step = step_len / norm;
                for (coord, &f) in centers.center_mut(i).iter_mut().zip(force.iter()) {
                    let moved = *coord + step * f;
                    if moved > lower && moved < upper {
                        *coord = moved;
                    }
                }
            }
        }

        if report.coincident_skips > 0 || report.stalled_moves > 0 {
            log::debug!(
                "Drift relaxation skipped {} coincident pairs and {} zero-force moves",
                report.coincident_skips,
                report.stalled_moves
            );
        }

        report
    }
}
