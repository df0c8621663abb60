#![cfg(feature = "dev")]
//! Tests for center selection and drift relaxation.
//!
//! ## Test Organization
//!
//! 1. **Selection** - Anchor indices and copied delay vectors
//! 2. **Drift** - Known trajectories, containment and coincident guards

use approx::assert_relative_eq;

use rbf_rs::internals::algorithms::drift::{
    DRIFT_ITERATIONS, DRIFT_LOWER, DRIFT_UPPER, DriftRelaxer,
};
use rbf_rs::internals::algorithms::selection::CenterSelector;
use rbf_rs::internals::primitives::centers::CenterSet;
use rbf_rs::internals::primitives::embedding::EmbeddedView;

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

// ============================================================================
// Selection Tests
// ============================================================================

/// Test three centers on a 1D ramp sit at the start, middle and end.
#[test]
fn test_select_evenly_spaced_1d() {
    let series = ramp(11);
    let view = EmbeddedView::new(&series, 1, 1).unwrap();
    let centers = CenterSelector::select(&view, 3);

    assert_eq!(centers.as_flat(), &[0.0, 5.0, 10.0]);
}

/// Test anchors use floor division of the scaled offset.
#[test]
fn test_select_anchor_floor_division() {
    let series = ramp(11);
    let view = EmbeddedView::new(&series, 1, 1).unwrap();

    // span = 10, anchors 0, 10/3, 20/3, 10
    let anchors: Vec<usize> = (0..4).map(|i| CenterSelector::anchor(&view, i, 4)).collect();
    assert_eq!(anchors, vec![0, 3, 6, 10]);

    let centers = CenterSelector::select(&view, 4);
    assert_eq!(centers.as_flat(), &[0.0, 3.0, 6.0, 10.0]);
}

/// Test multi-dimensional centers copy lagged coordinates, newest first.
#[test]
fn test_select_delay_vectors() {
    let series = ramp(11);
    let view = EmbeddedView::new(&series, 2, 2).unwrap();
    let centers = CenterSelector::select(&view, 3);

    // window = 2, span = 8, anchors 2, 6, 10
    assert_eq!(centers.len(), 3);
    assert_eq!(centers.center(0), &[2.0, 0.0]);
    assert_eq!(centers.center(1), &[6.0, 4.0]);
    assert_eq!(centers.center(2), &[10.0, 8.0]);
}

/// Test a single center uses the first complete delay vector.
#[test]
fn test_select_single_center() {
    let series = ramp(6);
    let view = EmbeddedView::new(&series, 3, 1).unwrap();
    let centers = CenterSelector::select(&view, 1);

    assert_eq!(centers.as_flat(), &[2.0, 1.0, 0.0]);
}

/// Test one center per index when the count equals the usable positions.
#[test]
fn test_select_every_position() {
    let series = ramp(5);
    let view = EmbeddedView::new(&series, 1, 1).unwrap();
    let centers = CenterSelector::select(&view, 5);

    assert_eq!(centers.as_flat(), series.as_slice());
    assert!(!centers.has_coincident());
}

// ============================================================================
// Drift Tests
// ============================================================================

/// Test the outer centers are pushed to the box edge, the middle one stays.
#[test]
fn test_drift_three_centers_1d() {
    let mut centers = CenterSet::from_flat(vec![0.0f64, 0.5, 1.0], 1);
    let report = DriftRelaxer::relax(&mut centers);

    assert_eq!(report.coincident_skips, 0);
    assert_eq!(report.stalled_moves, 0);

    let c = centers.as_flat();
    assert_relative_eq!(c[0], -0.1, epsilon = 1e-12);
    assert_relative_eq!(c[1], 0.5, epsilon = 1e-12);
    assert_relative_eq!(c[2], 1.09, epsilon = 1e-12);
}

/// Test two centers on the diagonal move apart along it.
#[test]
fn test_drift_two_centers_2d() {
    let mut centers = CenterSet::from_flat(vec![0.2f64, 0.2, 0.8, 0.8], 2);
    DriftRelaxer::relax(&mut centers);

    // Each sweep moves each center 0.01 along the diagonal: 20 * 0.01 / sqrt(2)
    let shift = DRIFT_ITERATIONS as f64 * 0.01 / 2.0f64.sqrt();
    let c = centers.as_flat();
    assert_relative_eq!(c[0], 0.2 - shift, epsilon = 1e-12);
    assert_relative_eq!(c[1], 0.2 - shift, epsilon = 1e-12);
    assert_relative_eq!(c[2], 0.8 + shift, epsilon = 1e-12);
    assert_relative_eq!(c[3], 0.8 + shift, epsilon = 1e-12);
}

/// Test coincident centers contribute no force and stay finite.
#[test]
fn test_drift_coincident_centers_are_guarded() {
    let mut centers = CenterSet::from_flat(vec![0.5f64, 0.5], 1);
    let report = DriftRelaxer::relax(&mut centers);

    assert_eq!(centers.as_flat(), &[0.5, 0.5]);
    assert_eq!(report.coincident_skips, 2 * DRIFT_ITERATIONS);
    assert_eq!(report.stalled_moves, 2 * DRIFT_ITERATIONS);
}

/// Test a coincident pair next to a distinct center gets split apart.
#[test]
fn test_drift_splits_coincident_pair() {
    let mut centers = CenterSet::from_flat(vec![0.0f64, 1.0, 0.0], 1);
    let report = DriftRelaxer::relax(&mut centers);

    assert!(report.coincident_skips > 0);
    assert!(!centers.has_coincident());
    assert!(centers.as_flat().iter().all(|v| v.is_finite()));
}

/// Test coordinates never leave the padded unit box.
#[test]
fn test_drift_containment() {
    let mut centers = CenterSet::from_flat(
        vec![0.0f64, 0.0, 0.01, 0.99, 0.98, 0.02, 1.0, 1.0, 0.5, 0.5],
        2,
    );
    DriftRelaxer::relax_with(&mut centers, 500);

    for &v in centers.as_flat() {
        assert!(v > DRIFT_LOWER && v < DRIFT_UPPER, "coordinate {} escaped", v);
    }
}

/// Test zero iterations leave the centers untouched.
#[test]
fn test_drift_zero_iterations() {
    let mut centers = CenterSet::from_flat(vec![0.1f64, 0.9], 1);
    let report = DriftRelaxer::relax_with(&mut centers, 0);

    assert_eq!(centers.as_flat(), &[0.1, 0.9]);
    assert_eq!(report.coincident_skips, 0);
}
