//! High-level API for RBF forecasting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the embedding and network parameters and a choice of
//! execution adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Online modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`RbfBuilder`] via `Rbf::new()`.
//! 2. Chain configuration methods (`.dimension()`, `.centers()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.
//! 4. Call `.build()` and then `.fit()` or `.add_point()`.

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;

// Internal dependencies
use crate::adapters::batch::BatchRbfBuilder;
use crate::adapters::online::OnlineRbfBuilder;
use crate::algorithms::fitting::FitLinalg;
use crate::engine::executor::RbfExecutor;

// Publicly re-exported types
pub use crate::adapters::batch::BatchRbf;
pub use crate::adapters::online::{FitFallback, OnlineOutput, OnlineRbf};
pub use crate::engine::executor::RbfConfig;
pub use crate::engine::output::RbfResult;
pub use crate::primitives::errors::RbfError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

// ============================================================================
// Free Function
// ============================================================================

/// Fit the network to `series` and forecast `config.step` values past its end.
///
/// The forecast is returned in the scale of the input series.
///
/// # Example
///
/// ```
/// use rbf_rs::prelude::*;
///
/// let series: Vec<f64> = (0..=10).map(|i| i as f64).collect();
/// let config = RbfConfig { dimension: 1, centers: 3, ..RbfConfig::default() };
/// let next = fit_and_predict(&series, &config)?;
/// assert!((next - 11.0).abs() < 1.5);
/// # Ok::<(), RbfError>(())
/// ```
pub fn fit_and_predict<T: FitLinalg>(series: &[T], config: &RbfConfig) -> Result<T, RbfError> {
    RbfExecutor::run(series, config).map(|result| result.prediction)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring RBF parameters and execution modes.
#[derive(Debug, Clone)]
pub struct RbfBuilder<T> {
    /// Embedding dimension.
    pub dimension: Option<usize>,

    /// Embedding delay.
    pub delay: Option<usize>,

    /// Number of centers.
    pub centers: Option<usize>,

    /// Forecast horizon.
    pub step: Option<usize>,

    /// Training prefix length.
    pub insample: Option<usize>,

    /// Drift relaxation of the centers.
    pub drift: Option<bool>,

    /// Window capacity (Online only).
    pub window_capacity: Option<usize>,

    /// Minimum values before forecasting (Online only).
    pub min_points: Option<usize>,

    /// Fit failure policy (Online only).
    pub fit_fallback: Option<FitFallback>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: FitLinalg + Debug> Default for RbfBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FitLinalg + Debug> RbfBuilder<T> {
    /// Create a new builder with no parameters set.
    pub fn new() -> Self {
        Self {
            dimension: None,
            delay: None,
            centers: None,
            step: None,
            insample: None,
            drift: None,
            window_capacity: None,
            min_points: None,
            fit_fallback: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RbfAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the embedding dimension `D`.
    pub fn dimension(mut self, dimension: usize) -> Self {
        if self.dimension.is_some() {
            self.duplicate_param = Some("dimension");
        }
        self.dimension = Some(dimension);
        self
    }

    /// Set the embedding delay `L`.
    pub fn delay(mut self, delay: usize) -> Self {
        if self.delay.is_some() {
            self.duplicate_param = Some("delay");
        }
        self.delay = Some(delay);
        self
    }

    /// Set the number of centers `C`.
    pub fn centers(mut self, centers: usize) -> Self {
        if self.centers.is_some() {
            self.duplicate_param = Some("centers");
        }
        self.centers = Some(centers);
        self
    }

    /// Set the forecast horizon.
    pub fn step(mut self, step: usize) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Fit only on the first `insample` values.
    pub fn insample(mut self, insample: usize) -> Self {
        if self.insample.is_some() {
            self.duplicate_param = Some("insample");
        }
        self.insample = Some(insample);
        self
    }

    /// Enable or disable drift relaxation of the centers.
    pub fn drift(mut self, enabled: bool) -> Self {
        if self.drift.is_some() {
            self.duplicate_param = Some("drift");
        }
        self.drift = Some(enabled);
        self
    }

    /// Set the window capacity for online processing (Online only).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        if self.window_capacity.is_some() {
            self.duplicate_param = Some("window_capacity");
        }
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the minimum values before forecasting starts (Online only).
    pub fn min_points(mut self, points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(points);
        self
    }

    /// Set the behavior when a fit fails (Online only).
    pub fn fit_fallback(mut self, policy: FitFallback) -> Self {
        if self.fit_fallback.is_some() {
            self.duplicate_param = Some("fit_fallback");
        }
        self.fit_fallback = Some(policy);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RbfAdapter<T: FitLinalg + Debug> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RbfBuilder`] into a specialized execution builder.
    fn convert(builder: RbfBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: FitLinalg + Debug> RbfAdapter<T> for Batch {
    type Output = BatchRbfBuilder<T>;

    fn convert(builder: RbfBuilder<T>) -> Self::Output {
        let mut result = BatchRbfBuilder::default();

        if let Some(dimension) = builder.dimension {
            result.dimension = dimension;
        }
        if let Some(delay) = builder.delay {
            result.delay = delay;
        }
        if let Some(centers) = builder.centers {
            result.centers = centers;
        }
        if let Some(step) = builder.step {
            result.step = step;
        }
        if let Some(insample) = builder.insample {
            result.insample = Some(insample);
        }
        if let Some(drift) = builder.drift {
            result.drift = drift;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for sliding-window online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: FitLinalg + Debug> RbfAdapter<T> for Online {
    type Output = OnlineRbfBuilder<T>;

    fn convert(builder: RbfBuilder<T>) -> Self::Output {
        let mut result = OnlineRbfBuilder::default();

        // Override with user-provided values
        if let Some(capacity) = builder.window_capacity {
            result.window_capacity = capacity;
        }
        if let Some(min_points) = builder.min_points {
            result.min_points = Some(min_points);
        }
        if let Some(policy) = builder.fit_fallback {
            result.fit_fallback = policy;
        }
        if let Some(dimension) = builder.dimension {
            result.dimension = dimension;
        }
        if let Some(delay) = builder.delay {
            result.delay = delay;
        }
        if let Some(centers) = builder.centers {
            result.centers = centers;
        }
        if let Some(step) = builder.step {
            result.step = step;
        }
        if let Some(insample) = builder.insample {
            result.insample = Some(insample);
        }
        if let Some(drift) = builder.drift {
            result.drift = drift;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
