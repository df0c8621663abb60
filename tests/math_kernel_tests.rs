#![cfg(feature = "dev")]
//! Tests for distances, the bandwidth estimator, the kernel and the solver.
//!
//! ## Test Organization
//!
//! 1. **Distance** - Squared Euclidean distance
//! 2. **Bandwidth** - Average inter-center distance
//! 3. **Kernel** - Gaussian response bounds and values
//! 4. **Linear Algebra** - Symmetric solves and singular detection

use approx::assert_relative_eq;

use rbf_rs::internals::math::distance::{avdistance, squared_euclidean};
use rbf_rs::internals::math::kernel::GaussianKernel;
use rbf_rs::internals::math::linalg::FloatLinalg;
use rbf_rs::internals::primitives::centers::CenterSet;
use rbf_rs::internals::primitives::embedding::EmbeddedView;

// ============================================================================
// Distance Tests
// ============================================================================

/// Test squared distance of a 3-4-5 triangle.
#[test]
fn test_squared_euclidean() {
    assert_relative_eq!(squared_euclidean(&[0.0f64, 0.0], &[3.0, 4.0]), 25.0);
    assert_eq!(squared_euclidean(&[1.5f64], &[1.5]), 0.0);
}

// ============================================================================
// Bandwidth Tests
// ============================================================================

/// Test the bandwidth of three evenly spaced 1D centers.
#[test]
fn test_avdistance_evenly_spaced() {
    // Ordered pair distances sum to 3, divided by 2 * 3 * 1
    let centers = CenterSet::from_flat(vec![0.0f64, 0.5, 1.0], 1);
    assert_relative_eq!(avdistance(&centers), 0.5f64.sqrt(), epsilon = 1e-15);
}

/// Test the bandwidth normalizes by dimension.
#[test]
fn test_avdistance_two_dimensions() {
    // Both ordered pairs are 2 apart (squared), 4 / (1 * 2 * 2) = 1
    let centers = CenterSet::from_flat(vec![0.0f64, 0.0, 1.0, 1.0], 2);
    assert_relative_eq!(avdistance(&centers), 1.0);
}

/// Test coincident centers give a zero bandwidth.
#[test]
fn test_avdistance_zero_for_coincident_centers() {
    let centers = CenterSet::from_flat(vec![0.3f64, 0.3, 0.3], 1);
    assert_eq!(avdistance(&centers), 0.0);

    let single = CenterSet::from_flat(vec![0.3f64], 1);
    assert_eq!(avdistance(&single), 0.0);
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test the response is 1 at the center and e^-1 at squared distance 2σ².
#[test]
fn test_kernel_point_values() {
    let kernel = GaussianKernel::new(1.0f64);
    assert_eq!(kernel.bandwidth(), 1.0);

    // Delay vector at n = 1 is (0.2, 0.4)
    let series = [0.4f64, 0.2];
    let view = EmbeddedView::new(&series, 2, 1).unwrap();
    assert_eq!(kernel.rbf(&view, 1, &[0.2, 0.4]), 1.0);

    let ones = [1.0f64, 1.0];
    let view = EmbeddedView::new(&ones, 2, 1).unwrap();
    assert_relative_eq!(
        kernel.rbf(&view, 1, &[0.0, 0.0]),
        (-1.0f64).exp(),
        epsilon = 1e-15
    );
}

/// Test the view-based response reads the lagged coordinates.
#[test]
fn test_kernel_on_embedded_view() {
    let series = [0.0f64, 1.0, 2.0, 3.0];
    let view = EmbeddedView::new(&series, 2, 1).unwrap();
    let kernel = GaussianKernel::new(2.0f64);

    // Delay vector at n = 3 is (3, 2)
    assert_eq!(kernel.rbf(&view, 3, &[3.0, 2.0]), 1.0);
    // Squared distance 8, denominator 2 * 2^2 = 8
    assert_relative_eq!(
        kernel.rbf(&view, 3, &[1.0, 0.0]),
        (-1.0f64).exp(),
        epsilon = 1e-15
    );
    // (2, 1) against (1, 0): squared distance 2
    assert_relative_eq!(
        kernel.rbf(&view, 2, &[1.0, 0.0]),
        (-0.25f64).exp(),
        epsilon = 1e-15
    );
}

/// Test the response decreases with distance and stays in (0, 1].
#[test]
fn test_kernel_monotone_and_bounded() {
    let kernel = GaussianKernel::new(0.3f64);
    let distances: Vec<f64> = (0..20).map(|i| i as f64 * 0.05).collect();
    let view = EmbeddedView::new(&distances, 1, 1).unwrap();
    let mut previous = 1.0;
    for (i, &d) in distances.iter().enumerate().skip(1) {
        let r = kernel.rbf(&view, i, &[0.0]);
        assert!(r > 0.0 && r < previous, "response {} at distance {}", r, d);
        previous = r;
    }
}

// ============================================================================
// Linear Algebra Tests
// ============================================================================

/// Test a symmetric positive definite system (Cholesky path).
#[test]
fn test_solve_symmetric_spd() {
    let a = [4.0f64, 1.0, 1.0, 3.0];
    let b = [1.0f64, 2.0];
    let x = f64::solve_symmetric(&a, &b, 2).unwrap();

    assert_relative_eq!(x[0], 1.0 / 11.0, epsilon = 1e-14);
    assert_relative_eq!(x[1], 7.0 / 11.0, epsilon = 1e-14);
}

/// Test a symmetric indefinite system falls back to LU.
#[test]
fn test_solve_symmetric_indefinite() {
    let a = [0.0f64, 1.0, 1.0, 0.0];
    let b = [2.0f64, 3.0];
    let x = f64::solve_symmetric(&a, &b, 2).unwrap();

    assert_relative_eq!(x[0], 3.0, epsilon = 1e-14);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-14);
}

/// Test an exactly singular matrix is reported.
#[test]
fn test_solve_symmetric_singular() {
    let a = [1.0f64, 1.0, 1.0, 1.0];
    let b = [1.0f64, 2.0];
    assert!(f64::solve_symmetric(&a, &b, 2).is_none());

    let zeros = [0.0f32; 9];
    assert!(f32::solve_symmetric(&zeros, &[1.0, 1.0, 1.0], 3).is_none());
}

/// Test a nearly singular indefinite matrix is rejected by the pivot check.
#[test]
fn test_solve_symmetric_negligible_pivot() {
    // Second row is twice the first up to one ulp, so Cholesky fails and
    // the trailing LU pivot is at rounding level
    let almost = 4.0f64 - 2.0 * f64::EPSILON;
    let a = [1.0f64, 2.0, 2.0, almost];
    let b = [1.0f64, 2.0];
    assert!(f64::solve_symmetric(&a, &b, 2).is_none());

    // A well separated indefinite system still solves
    let a = [1.0f64, 2.0, 2.0, 3.0];
    let x = f64::solve_symmetric(&a, &b, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-14);
    assert_relative_eq!(x[1], 0.0, epsilon = 1e-14);
}

/// Test mismatched sizes are rejected.
#[test]
fn test_solve_symmetric_bad_dimensions() {
    assert!(f64::solve_symmetric(&[1.0, 0.0, 0.0], &[1.0, 1.0], 2).is_none());
    assert!(f64::solve_symmetric(&[], &[], 0).is_none());
}

/// Test single precision solves.
#[test]
fn test_solve_symmetric_f32() {
    let a = [2.0f32, 0.0, 0.0, 4.0];
    let b = [1.0f32, 1.0];
    let x = f32::solve_symmetric(&a, &b, 2).unwrap();

    assert_relative_eq!(x[0], 0.5f32);
    assert_relative_eq!(x[1], 0.25f32);
}
