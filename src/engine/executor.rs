//! Execution engine for RBF forecasting.
//!
//! ## Purpose
//!
//! This module provides the executor that runs one fit-and-predict pass. It
//! coordinates the lower layers in a fixed order:
//!
//! ```text
//! validate → clamp → rescale → select → drift → bandwidth → fit → predict
//! ```
//!
//! ## Design notes
//!
//! * **Explicit configuration**: Every parameter travels in an immutable
//!   `RbfConfig`; nothing is process-wide.
//! * **Working copy**: The caller's series is never mutated; rescaling happens
//!   on an owned copy.
//! * **Buffer reuse**: `run_with_buffer` accepts a caller-owned `FitBuffer` so
//!   repeated calls (online mode) avoid reallocating the normal equations.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Clamping**: The center count and the training prefix are clamped to
//!   the series length before use.
//! * **Singular guard**: Coincident centers or a zero bandwidth make the
//!   normal equations rank deficient and are rejected before solving.
//!
//! ## Invariants
//!
//! * No allocation happens before all data-independent and length checks pass.
//! * Identical inputs produce bitwise-identical results.
//!
//! ## Non-goals
//!
//! * This module does not provide multi-step iterated forecasting.
//! * This module does not report in-sample or out-of-sample errors.

// Internal dependencies
use crate::algorithms::drift::DriftRelaxer;
use crate::algorithms::fitting::{FitLinalg, Fitter};
use crate::algorithms::prediction::Predictor;
use crate::algorithms::selection::CenterSelector;
use crate::engine::output::RbfResult;
use crate::engine::validator::Validator;
use crate::math::distance::avdistance;
use crate::math::kernel::GaussianKernel;
use crate::math::scaling::RescaleTransform;
use crate::math::statistics::Statistics;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::embedding::EmbeddedView;
use crate::primitives::errors::RbfError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one RBF fit-and-predict pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RbfConfig {
    /// Embedding dimension `D` (at least 1).
    pub dimension: usize,

    /// Embedding delay `L` (at least 1).
    pub delay: usize,

    /// Number of centers `C` (at least 2; clamped to the series length).
    pub centers: usize,

    /// Forecast horizon (at least 1).
    pub step: usize,

    /// Length of the training prefix. `None` uses the whole series.
    pub insample: Option<usize>,

    /// Whether to relax the centers before fitting.
    pub drift: bool,
}

impl Default for RbfConfig {
    fn default() -> Self {
        Self {
            dimension: 2,
            delay: 1,
            centers: 2,
            step: 1,
            insample: None,
            drift: true,
        }
    }
}

impl RbfConfig {
    /// Check every data-independent constraint.
    pub fn validate(&self) -> Result<(), RbfError> {
        Validator::validate_dimension(self.dimension)?;
        Validator::validate_delay(self.delay)?;
        Validator::validate_step(self.step)?;
        Validator::validate_centers(self.centers)?;
        if let Some(insample) = self.insample {
            Validator::validate_insample(insample, 1)?;
        }
        Validator::min_length(self.dimension, self.delay, self.step)?;
        Ok(())
    }

    /// Smallest series this configuration accepts.
    pub fn min_series_len(&self) -> Result<usize, RbfError> {
        Validator::min_length(self.dimension, self.delay, self.step)
    }

    /// Clamp the center count and training prefix to a series of length `len`.
    pub fn clamped(&self, len: usize) -> Self {
        let mut out = *self;

        if self.centers > len {
            log::debug!("Clamping centers from {} to series length {}", self.centers, len);
            out.centers = len;
        }

        let insample = match self.insample {
            Some(n) if n > len => {
                log::debug!("Clamping insample from {n} to series length {len}");
                len
            }
            Some(n) => n,
            None => len,
        };
        out.insample = Some(insample);

        out
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the forecasting pipeline.
pub struct RbfExecutor;

impl RbfExecutor {
    /// Fit the network to `series` and forecast one value.
    pub fn run<T: FitLinalg>(series: &[T], config: &RbfConfig) -> Result<RbfResult<T>, RbfError> {
        let mut buffer = FitBuffer::default();
        Self::run_with_buffer(series, config, &mut buffer)
    }

    /// Same as [`run`](Self::run), accumulating into a caller-owned buffer.
    pub fn run_with_buffer<T: FitLinalg>(
        series: &[T],
        config: &RbfConfig,
        buffer: &mut FitBuffer<T>,
    ) -> Result<RbfResult<T>, RbfError> {
        // Validation
        config.validate()?;
        Validator::validate_series(series)?;
        Validator::validate_length(series.len(), config.dimension, config.delay, config.step)?;

        let config = config.clamped(series.len());
        let min_len = config.min_series_len()?;
        let insample = config.insample.unwrap_or(series.len());
        Validator::validate_insample(insample, min_len)?;

        // Rescale a working copy
        let statistics = Statistics::compute(series);
        let mut normalized = series.to_vec();
        let transform = RescaleTransform::rescale_in_place(&mut normalized)?;
        let view = EmbeddedView::new(&normalized, config.dimension, config.delay)?;

        // Centers
        let mut centers = CenterSelector::select(&view, config.centers);
        let drift = config.drift.then(|| DriftRelaxer::relax(&mut centers));

        let bandwidth = avdistance(&centers);
        if !bandwidth.is_finite() || bandwidth <= T::zero() || centers.has_coincident() {
            return Err(RbfError::SingularSystem {
                size: centers.len() + 1,
            });
        }
        let kernel = GaussianKernel::new(bandwidth);

        // Fit and forecast
        let fit = Fitter::fit(&view, &centers, &kernel, config.step, insample, buffer)?;
        let prediction = Predictor::predict(&view, &centers, &kernel, &fit.coefficients, &transform)?;

        Ok(RbfResult {
            prediction,
            centers,
            bandwidth: kernel.bandwidth(),
            coefficients: fit.coefficients,
            transform,
            statistics,
            training_points: fit.training_points,
            config,
            drift,
        })
    }
}
