//! Input validation for RBF configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for forecaster configuration
//! parameters and input series. It checks requirements such as the series
//! length against the embedding window, finite values and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Dimension, delay and step at least 1, centers at least 2.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Window Requirements**: A series needs `(D−1)·L + step + 1` points so that
//!   at least one training pair exists.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not rescale or clamp input data.
//! * This module does not detect constant series (handled by `scaling`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::embedding::EmbeddedView;
use crate::primitives::errors::RbfError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for RBF configuration and input data.
///
/// Provides static methods for validating forecaster parameters and input
/// series. All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input series: non-empty and finite.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), RbfError> {
        if series.is_empty() {
            return Err(RbfError::EmptyInput);
        }

        for (i, &val) in series.iter().enumerate() {
            if !val.is_finite() {
                return Err(RbfError::InvalidNumericValue(format!(
                    "series[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RbfError> {
        if !val.is_finite() {
            return Err(RbfError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Minimum series length for a given embedding and horizon.
    pub fn min_length(dimension: usize, delay: usize, step: usize) -> Result<usize, RbfError> {
        let window = EmbeddedView::<f64>::window_span(dimension, delay)?;
        window
            .checked_add(step)
            .and_then(|v| v.checked_add(1))
            .ok_or(RbfError::InvalidStep(step))
    }

    /// Validate the series length against the embedding window and horizon.
    pub fn validate_length(
        len: usize,
        dimension: usize,
        delay: usize,
        step: usize,
    ) -> Result<(), RbfError> {
        let min = Self::min_length(dimension, delay, step)?;
        if len < min {
            return Err(RbfError::TooFewPoints { got: len, min });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the embedding dimension.
    pub fn validate_dimension(dimension: usize) -> Result<(), RbfError> {
        if dimension == 0 {
            return Err(RbfError::InvalidDimension(dimension));
        }
        Ok(())
    }

    /// Validate the embedding delay.
    pub fn validate_delay(delay: usize) -> Result<(), RbfError> {
        if delay == 0 {
            return Err(RbfError::InvalidDelay(delay));
        }
        Ok(())
    }

    /// Validate the forecast horizon.
    pub fn validate_step(step: usize) -> Result<(), RbfError> {
        if step == 0 {
            return Err(RbfError::InvalidStep(step));
        }
        Ok(())
    }

    /// Validate the number of centers.
    pub fn validate_centers(centers: usize) -> Result<(), RbfError> {
        if centers < 2 {
            return Err(RbfError::InvalidCenters(centers));
        }
        Ok(())
    }

    /// Validate a training prefix length against the minimum it must cover.
    pub fn validate_insample(insample: usize, min: usize) -> Result<(), RbfError> {
        if insample < min {
            return Err(RbfError::InvalidInsample { got: insample, min });
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate the maximum capacity of the sliding window in online mode.
    pub fn validate_window_capacity(window_capacity: usize, min: usize) -> Result<(), RbfError> {
        if window_capacity < min {
            return Err(RbfError::InvalidWindowCapacity {
                got: window_capacity,
                min,
            });
        }
        Ok(())
    }

    /// Validate the activation threshold for online forecasting.
    ///
    /// `min` is the shortest series the embedding accepts.
    pub fn validate_min_points(
        min_points: usize,
        min: usize,
        window_capacity: usize,
    ) -> Result<(), RbfError> {
        if min_points < min || min_points > window_capacity {
            return Err(RbfError::InvalidMinPoints {
                got: min_points,
                min,
                window_capacity,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RbfError> {
        if let Some(param) = duplicate_param {
            return Err(RbfError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
