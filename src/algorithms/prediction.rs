//! Evaluation of the fitted network.
//!
//! ## Purpose
//!
//! This module evaluates the output layer on a delay vector:
//!
//! ```text
//! ŝ = c_0 + Σ_i c_i · rbf(x(n), center_i)
//! ```
//!
//! The forecast is this value at the last embedding index, mapped back to the
//! original scale.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::math::scaling::RescaleTransform;
use crate::primitives::centers::CenterSet;
use crate::primitives::embedding::EmbeddedView;
use crate::primitives::errors::RbfError;

/// Evaluates a fitted network.
pub struct Predictor;

impl Predictor {
    /// Normalized network output at embedding index `n`.
    pub fn evaluate<T: Float>(
        view: &EmbeddedView<'_, T>,
        n: usize,
        centers: &CenterSet<T>,
        kernel: &GaussianKernel<T>,
        coefficients: &[T],
    ) -> T {
        debug_assert_eq!(coefficients.len(), centers.len() + 1);
        let (&bias, weights) = match coefficients.split_first() {
            Some(split) => split,
            None => return T::zero(),
        };
        weights
            .iter()
            .zip(centers.iter())
            .fold(bias, |acc, (&w, center)| acc + w * kernel.rbf(view, n, center))
    }

    /// Forecast `step` points past the end of the series, in the original scale.
    pub fn predict<T: Float>(
        view: &EmbeddedView<'_, T>,
        centers: &CenterSet<T>,
        kernel: &GaussianKernel<T>,
        coefficients: &[T],
        transform: &RescaleTransform<T>,
    ) -> Result<T, RbfError> {
        let normalized = Self::evaluate(view, view.last_index(), centers, kernel, coefficients);
        let prediction = transform.inverse(normalized);

        if !prediction.is_finite() {
            return Err(RbfError::NumericDegeneracy(format!(
                "non-finite prediction {}",
                prediction.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(prediction)
    }
}
