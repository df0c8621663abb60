//! Batch adapter for one-shot RBF forecasting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete
//! series in memory, fits the network once and forecasts a single value.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire series in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * All values must be finite.
//! * The series must cover the embedding window plus the horizon.
//! * The caller's series is left untouched.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use online adapter).
//! * This adapter does not handle missing values.

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::fitting::FitLinalg;
use crate::engine::executor::{RbfConfig, RbfExecutor};
use crate::engine::output::RbfResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RbfError;

// ============================================================================
// Batch RBF Builder
// ============================================================================

/// Builder for the batch RBF forecaster.
#[derive(Debug, Clone)]
pub struct BatchRbfBuilder<T> {
    /// Embedding dimension
    pub dimension: usize,

    /// Embedding delay
    pub delay: usize,

    /// Number of centers
    pub centers: usize,

    /// Forecast horizon
    pub step: usize,

    /// Training prefix length (`None` = whole series)
    pub insample: Option<usize>,

    /// Whether to relax the centers
    pub drift: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: FitLinalg + Debug> Default for BatchRbfBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FitLinalg + Debug> BatchRbfBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        let defaults = RbfConfig::default();
        Self {
            dimension: defaults.dimension,
            delay: defaults.delay,
            centers: defaults.centers,
            step: defaults.step,
            insample: defaults.insample,
            drift: defaults.drift,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the embedding dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the embedding delay.
    pub fn delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    /// Set the number of centers.
    pub fn centers(mut self, centers: usize) -> Self {
        self.centers = centers;
        self
    }

    /// Set the forecast horizon.
    pub fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Fit only on the first `insample` points.
    pub fn insample(mut self, insample: usize) -> Self {
        self.insample = Some(insample);
        self
    }

    /// Enable or disable drift relaxation of the centers.
    pub fn drift(mut self, enabled: bool) -> Self {
        self.drift = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch forecaster.
    pub fn build(self) -> Result<BatchRbf<T>, RbfError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = RbfConfig {
            dimension: self.dimension,
            delay: self.delay,
            centers: self.centers,
            step: self.step,
            insample: self.insample,
            drift: self.drift,
        };
        config.validate()?;

        Ok(BatchRbf {
            config,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Batch RBF Processor
// ============================================================================

/// Batch RBF forecaster.
#[derive(Debug, Clone, Copy)]
pub struct BatchRbf<T> {
    config: RbfConfig,
    _marker: PhantomData<T>,
}

impl<T: FitLinalg + Debug> BatchRbf<T> {
    /// Fit the network to `series` and forecast `step` points past its end.
    pub fn fit(&self, series: &[T]) -> Result<RbfResult<T>, RbfError> {
        RbfExecutor::run(series, &self.config)
    }

    /// The validated configuration.
    pub fn config(&self) -> &RbfConfig {
        &self.config
    }
}
