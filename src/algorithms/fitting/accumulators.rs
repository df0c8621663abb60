//! Gram Accumulators
//!
//! ## Purpose
//!
//! This module provides scalar and SIMD accumulation of one training point into
//! the lower triangle of the normal equations.
//!
//! Both paths perform the same multiply then add per entry, in the same order,
//! so their results are bitwise identical.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Accumulation Functions
// ============================================================================

/// Add `h hᵀ` to the lower triangle of `gram` and `h · target` to `rhs` (Scalar).
///
/// `gram` is row-major with `order` columns; `responses` holds `order` entries.
#[inline]
pub fn accumulate_lower_scalar<T: Float>(
    gram: &mut [T],
    rhs: &mut [T],
    responses: &[T],
    target: T,
    order: usize,
) {
    for (i, &hi) in responses.iter().enumerate().take(order) {
        let row = &mut gram[i * order..i * order + i + 1];
        for (g, &hj) in row.iter_mut().zip(responses.iter()) {
            *g = *g + hi * hj;
        }
        rhs[i] = rhs[i] + hi * target;
    }
}

/// Add `h hᵀ` to the lower triangle of `gram` and `h · target` to `rhs` (SIMD).
#[inline]
pub fn accumulate_lower_simd(
    gram: &mut [f64],
    rhs: &mut [f64],
    responses: &[f64],
    target: f64,
    order: usize,
) {
    for i in 0..order {
        let hi = responses[i];
        let hi_v = f64x2::splat(hi);
        let row = &mut gram[i * order..i * order + i + 1];
        let len = row.len();
        let mut j = 0;

        // Process 2 entries at a time (f64x2)
        while j + 2 <= len {
            let acc = f64x2::new([row[j], row[j + 1]]);
            let hj = f64x2::new([responses[j], responses[j + 1]]);
            let out = (acc + hi_v * hj).to_array();
            row[j] = out[0];
            row[j + 1] = out[1];
            j += 2;
        }

        // Remainder
        while j < len {
            row[j] += hi * responses[j];
            j += 1;
        }

        rhs[i] += hi * target;
    }
}
