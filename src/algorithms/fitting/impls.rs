//! Fit Accumulator Implementations
//!
//! ## Purpose
//!
//! This module provides the concrete implementations of the `FitLinalg` trait for `f32` (standard precision) and `f64` (double precision) types.

// Modular dependencies
use super::FitLinalg;
use super::accumulators::{accumulate_lower_scalar, accumulate_lower_simd};

impl FitLinalg for f64 {
    #[inline]
    fn accumulate_lower(
        gram: &mut [f64],
        rhs: &mut [f64],
        responses: &[f64],
        target: f64,
        order: usize,
    ) {
        accumulate_lower_simd(gram, rhs, responses, target, order)
    }
}

impl FitLinalg for f32 {
    #[inline]
    fn accumulate_lower(
        gram: &mut [f32],
        rhs: &mut [f32],
        responses: &[f32],
        target: f32,
        order: usize,
    ) {
        accumulate_lower_scalar(gram, rhs, responses, target, order)
    }
}
