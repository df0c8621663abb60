//! Online adapter for sliding-window RBF forecasting.
//!
//! ## Purpose
//!
//! This module provides the online execution adapter. It keeps a sliding
//! window of the most recent measurements and, once enough of them have
//! arrived, refits the network on every new value and forecasts the next one.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a fixed-size circular buffer (VecDeque) for the sliding window.
//! * **Eviction**: Automatically evicts the oldest value when capacity is reached.
//! * **Processing**: Runs a full fit on the current window for each new value.
//! * **Workspace**: Scratch series and normal-equations buffer are reused across updates.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sliding Window**: Maintains recent history up to `window_capacity`.
//! * **Initialization Phase**: Returns `None` until `min_points` values are present.
//! * **Fit Fallback**: A failed fit (e.g. a flat window) either propagates the
//!   error or falls back to the window mean.
//!
//! ## Invariants
//!
//! * Window size never exceeds capacity.
//! * All values in the window are finite.
//! * The window keeps insertion order (oldest to newest).
//!
//! ## Non-goals
//!
//! * This adapter does not update the fit incrementally; each forecast is a fresh fit.
//! * This adapter does not handle out-of-order points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::VecDeque, vec::Vec};

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::fitting::FitLinalg;
use crate::engine::executor::{RbfConfig, RbfExecutor};
use crate::engine::validator::Validator;
use crate::math::statistics::Statistics;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::RbfError;

/// Default sliding-window capacity.
pub const DEFAULT_WINDOW_CAPACITY: usize = 30;

/// Policy when the fit on the current window fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitFallback {
    /// Forecast the mean of the window (default).
    #[default]
    WindowMean,

    /// Return the error to the caller.
    Propagate,
}

// ============================================================================
// Online RBF Builder
// ============================================================================

/// Builder for the online RBF forecaster.
#[derive(Debug, Clone)]
pub struct OnlineRbfBuilder<T> {
    /// Window capacity (maximum number of values to keep)
    pub window_capacity: usize,

    /// Minimum values before forecasting starts (`None` = window capacity)
    pub min_points: Option<usize>,

    /// Behavior when a fit fails
    pub fit_fallback: FitFallback,

    /// Embedding dimension
    pub dimension: usize,

    /// Embedding delay
    pub delay: usize,

    /// Number of centers
    pub centers: usize,

    /// Forecast horizon
    pub step: usize,

    /// Training prefix length within the window (`None` = whole window)
    pub insample: Option<usize>,

    /// Whether to relax the centers
    pub drift: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: FitLinalg + Debug> Default for OnlineRbfBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FitLinalg + Debug> OnlineRbfBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        let defaults = RbfConfig::default();
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            min_points: None,
            fit_fallback: FitFallback::default(),
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

    /// Fit only on the first `insample` values of each window.
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
    // Online-Specific Setters
    // ========================================================================

    /// Set the window capacity.
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = capacity;
        self
    }

    /// Set the minimum number of values before forecasting starts.
    pub fn min_points(mut self, min: usize) -> Self {
        self.min_points = Some(min);
        self
    }

    /// Set the behavior when a fit fails.
    pub fn fit_fallback(mut self, policy: FitFallback) -> Self {
        self.fit_fallback = policy;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the online forecaster.
    pub fn build(self) -> Result<OnlineRbf<T>, RbfError> {
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

        // The window, and the warm-up threshold, must hold one training pair
        let min_len = config.min_series_len()?;
        Validator::validate_window_capacity(self.window_capacity, min_len)?;
        let min_points = self.min_points.unwrap_or(self.window_capacity);
        Validator::validate_min_points(min_points, min_len, self.window_capacity)?;

        let capacity = self.window_capacity;
        Ok(OnlineRbf {
            config,
            window_capacity: capacity,
            min_points,
            fit_fallback: self.fit_fallback,
            window: VecDeque::with_capacity(capacity + 1),
            scratch: Vec::with_capacity(capacity),
            buffer: FitBuffer::new(config.centers.min(capacity)),
        })
    }
}

// ============================================================================
// Online RBF Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineOutput<T> {
    /// Forecast `step` values past the newest one
    pub prediction: T,

    /// Number of values the forecast was computed from
    pub window_size: usize,

    /// Why the fit failed, when the window mean was used instead
    pub fallback: Option<RbfError>,
}

impl<T> OnlineOutput<T> {
    /// Whether the forecast is the window mean rather than a network output.
    #[inline]
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

// ============================================================================
// Online RBF Processor
// ============================================================================

/// Online RBF forecaster over a sliding window.
#[derive(Debug, Clone)]
pub struct OnlineRbf<T> {
    config: RbfConfig,
    window_capacity: usize,
    min_points: usize,
    fit_fallback: FitFallback,
    window: VecDeque<T>,
    /// Contiguous copy of the window handed to the executor
    scratch: Vec<T>,
    /// Normal-equations workspace reused across fits
    buffer: FitBuffer<T>,
}

impl<T: FitLinalg + Debug> OnlineRbf<T> {
    /// Add a new value and forecast the next one.
    pub fn add_point(&mut self, value: T) -> Result<Option<OnlineOutput<T>>, RbfError> {
        Validator::validate_scalar(value, "value")?;

        // Add to window, evict oldest if over capacity
        self.window.push_back(value);
        if self.window.len() > self.window_capacity {
            self.window.pop_front();
        }

        if self.window.len() < self.min_points {
            return Ok(None);
        }

        self.scratch.clear();
        self.scratch.extend(self.window.iter().copied());

        match RbfExecutor::run_with_buffer(&self.scratch, &self.config, &mut self.buffer) {
            Ok(result) => Ok(Some(OnlineOutput {
                prediction: result.prediction,
                window_size: self.scratch.len(),
                fallback: None,
            })),
            Err(err) => match self.fit_fallback {
                FitFallback::Propagate => Err(err),
                FitFallback::WindowMean => {
                    log::debug!("Online fit failed ({err}), forecasting the window mean");
                    Ok(Some(OnlineOutput {
                        prediction: Statistics::mean(&self.scratch),
                        window_size: self.scratch.len(),
                        fallback: Some(err),
                    }))
                }
            },
        }
    }

    /// Get the current window size.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// The values currently in the window, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &T> + '_ {
        self.window.iter()
    }

    /// The validated configuration.
    pub fn config(&self) -> &RbfConfig {
        &self.config
    }

    /// Clear the window.
    pub fn reset(&mut self) {
        self.window.clear();
        self.scratch.clear();
    }
}
