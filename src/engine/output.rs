//! Result type for RBF forecasts.
//!
//! ## Purpose
//!
//! This module defines `RbfResult`, the outcome of one fit-and-predict call:
//! the forecast itself plus the fitted model (centers, bandwidth,
//! coefficients) and the transform needed to read it in the original scale.
//!
//! ## Design notes
//!
//! * **Normalized storage**: Centers, bandwidth and coefficients are stored as
//!   fitted, in the unit-interval space. Accessors map them back on demand.
//! * **Display**: A compact human-readable summary.
//!
//! ## Invariants
//!
//! * `coefficients.len() == centers.len() + 1`.
//! * `prediction` is finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::drift::DriftReport;
use crate::engine::executor::RbfConfig;
use crate::math::scaling::RescaleTransform;
use crate::math::statistics::Statistics;
use crate::primitives::centers::CenterSet;

/// Outcome of fitting the RBF network and forecasting one value.
#[derive(Debug, Clone, PartialEq)]
pub struct RbfResult<T> {
    /// Forecast for index `len − 1 + step`, in the original scale.
    pub prediction: T,

    /// Fitted centers in normalized space.
    pub centers: CenterSet<T>,

    /// Kernel bandwidth in normalized space.
    pub bandwidth: T,

    /// Bias followed by one weight per center, in normalized space.
    pub coefficients: Vec<T>,

    /// Affine map between the original and normalized scale.
    pub transform: RescaleTransform<T>,

    /// Mean and standard deviation of the raw input series.
    pub statistics: Statistics<T>,

    /// Number of training points in the normal equations.
    pub training_points: usize,

    /// Effective configuration after clamping to the series length.
    pub config: RbfConfig,

    /// Relaxation summary, when drift was applied.
    pub drift: Option<DriftReport>,
}

impl<T: Float> RbfResult<T> {
    /// Number of centers.
    #[inline]
    pub fn n_centers(&self) -> usize {
        self.centers.len()
    }

    /// Center coordinates in the original scale, flat `centers × dimension`.
    pub fn center_points(&self) -> Vec<T> {
        self.centers
            .as_flat()
            .iter()
            .map(|&c| self.transform.inverse(c))
            .collect()
    }

    /// Kernel bandwidth in the original scale.
    #[inline]
    pub fn bandwidth_original(&self) -> T {
        self.transform.inverse_scale(self.bandwidth)
    }

    /// Coefficients in the original scale.
    ///
    /// The bias becomes `c_0 · interval + min`; the weights become `c_i · interval`.
    pub fn coefficients_original(&self) -> Vec<T> {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i == 0 {
                    self.transform.inverse(c)
                } else {
                    self.transform.inverse_scale(c)
                }
            })
            .collect()
    }
}

impl<T: Float + Display> Display for RbfResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Prediction: {:.6}", self.prediction)?;
        writeln!(
            f,
            "  Embedding: dimension={} delay={} step={}",
            self.config.dimension, self.config.delay, self.config.step
        )?;
        writeln!(
            f,
            "  Centers: {} (drift {})",
            self.n_centers(),
            if self.drift.is_some() { "on" } else { "off" }
        )?;
        writeln!(
            f,
            "  Bandwidth: {:.6} (normalized {:.6})",
            self.bandwidth_original(),
            self.bandwidth
        )?;
        writeln!(f, "  Training points: {}", self.training_points)?;
        write!(
            f,
            "  Series: mean={:.6} std={:.6}",
            self.statistics.mean, self.statistics.std_dev
        )
    }
}
