//! Error types for RBF forecasting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! radial basis function model and producing a forecast: input validation,
//! parameter constraints, degenerate data and numerical failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (got vs. required).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty series, non-finite values, constant series.
//! 2. **Parameter validation**: Embedding window, horizon, center count, insample size.
//! 3. **Numerical failures**: Singular normal equations, non-finite model output.
//!
//! ## Invariants
//!
//! * Every failure is terminal for the call that produced it; nothing is retried.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery (see the online adapter's fallback policy).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for RBF forecasting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RbfError {
    /// The input series is empty.
    EmptyInput,

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// All values of the series are identical, so it cannot be rescaled.
    DegenerateInput {
        /// Smallest value of the series.
        min: f64,
        /// Largest value of the series.
        max: f64,
    },

    /// Embedding dimension must be at least 1.
    InvalidDimension(usize),

    /// Embedding delay must be at least 1.
    InvalidDelay(usize),

    /// Forecast horizon must be at least 1.
    InvalidStep(usize),

    /// At least two centers are required.
    InvalidCenters(usize),

    /// The series is shorter than one embedding window plus the forecast horizon.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// The insample prefix leaves no training pair.
    InvalidInsample {
        /// Effective insample length (after clamping to the series length).
        got: usize,
        /// Minimum insample length for one training pair.
        min: usize,
    },

    /// Window capacity is too small for the requested embedding.
    InvalidWindowCapacity {
        /// The window capacity provided.
        got: usize,
        /// Minimum required window capacity.
        min: usize,
    },

    /// Minimum points must cover one training pair and fit in the window.
    InvalidMinPoints {
        /// The min_points provided.
        got: usize,
        /// Smallest series the embedding can be fit on.
        min: usize,
        /// The window capacity.
        window_capacity: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The normal equations cannot be solved (coincident centers or a degenerate bandwidth).
    SingularSystem {
        /// Order of the linear system (centers + 1).
        size: usize,
    },

    /// The fitted model produced non-finite coefficients or a non-finite forecast.
    NumericDegeneracy(String),
}

impl RbfError {
    /// Whether this error belongs to the invalid-parameter family.
    ///
    /// These are detected before any heavy computation takes place.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension(_)
                | Self::InvalidDelay(_)
                | Self::InvalidStep(_)
                | Self::InvalidCenters(_)
                | Self::TooFewPoints { .. }
                | Self::InvalidInsample { .. }
                | Self::InvalidWindowCapacity { .. }
                | Self::InvalidMinPoints { .. }
                | Self::DuplicateParameter { .. }
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RbfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DegenerateInput { min, max } => write!(
                f,
                "Degenerate input: data ranges from {min} to {max}, it makes no sense to continue"
            ),
            Self::InvalidDimension(dim) => {
                write!(f, "Invalid embedding dimension: {dim} (must be >= 1)")
            }
            Self::InvalidDelay(delay) => write!(f, "Invalid delay: {delay} (must be >= 1)"),
            Self::InvalidStep(step) => write!(f, "Invalid step: {step} (must be >= 1)"),
            Self::InvalidCenters(centers) => {
                write!(f, "Invalid number of centers: {centers} (must be >= 2)")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidInsample { got, min } => {
                write!(f, "Invalid insample: {got} (must be at least {min})")
            }
            Self::InvalidWindowCapacity { got, min } => {
                write!(f, "Invalid window_capacity: {got} (must be at least {min})")
            }
            Self::InvalidMinPoints {
                got,
                min,
                window_capacity,
            } => {
                write!(
                    f,
                    "Invalid min_points: {got} (must be between {min} and window_capacity {window_capacity})"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::SingularSystem { size } => {
                write!(f, "Singular system: the {size}x{size} normal equations have no unique solution")
            }
            Self::NumericDegeneracy(s) => write!(f, "Numeric degeneracy: {s}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RbfError {}
