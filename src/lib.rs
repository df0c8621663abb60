//! # RBF: Radial Basis Function Forecasting for Rust
//!
//! A compact, deterministic implementation of autoregressive forecasting for
//! scalar time series with a radial basis function network.
//!
//! ## What is RBF forecasting?
//!
//! The series is delay-embedded: each index `n` becomes the vector
//! `(s[n], s[n−L], …, s[n−(D−1)L])`. A small set of Gaussian kernels
//! ("centers") is placed in this embedding space and a linear output layer is
//! fit by least squares so that the network maps the current delay vector to
//! the value `step` points ahead. The forecast is the network output on the
//! newest delay vector.
//!
//! **How it works:**
//!
//! 1. Rescale the series to `[0, 1]`
//! 2. Place `C` centers on evenly spaced delay vectors
//! 3. Relax the centers apart by pairwise repulsion (optional "drift")
//! 4. Set one kernel bandwidth from the average inter-center distance
//! 5. Solve the normal equations for a bias plus one weight per center
//! 6. Evaluate the network on the newest delay vector and undo the rescaling
//!
//! Everything is deterministic: identical inputs give bitwise-identical forecasts.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use rbf_rs::prelude::*;
//!
//! let series: Vec<f64> = (0..=10).map(|i| i as f64).collect();
//!
//! // Build the model
//! let model = Rbf::new()
//!     .dimension(1)   // Embedding dimension
//!     .centers(3)     // Number of kernels
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model and forecast the next value
//! let result = model.fit(&series)?;
//!
//! println!("{}", result);
//! # Result::<(), RbfError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Prediction: 10.284290
//!   Embedding: dimension=1 delay=1 step=1
//!   Centers: 3 (drift on)
//!   Bandwidth: 8.414670 (normalized 0.841467)
//!   Training points: 10
//!   Series: mean=5.000000 std=3.162278
//! ```
//!
//! ### One Call
//!
//! ```rust
//! use rbf_rs::prelude::*;
//!
//! let series = vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0];
//! let config = RbfConfig { dimension: 2, centers: 4, ..RbfConfig::default() };
//!
//! let forecast: f64 = fit_and_predict(&series, &config)?;
//! assert!(forecast.is_finite());
//! # Result::<(), RbfError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` method returns a `Result<RbfResult<T>, RbfError>`.
//!
//! - **`Ok(RbfResult<T>)`**: Contains the forecast and the fitted model.
//! - **`Err(RbfError)`**: Indicates a failure (constant series, too few points,
//!   singular normal equations, invalid parameters).
//!
//! ```rust
//! use rbf_rs::prelude::*;
//!
//! let flat = vec![2.0; 12];
//! let model = Rbf::new().dimension(1).centers(3).adapter(Batch).build()?;
//!
//! match model.fit(&flat) {
//!     Err(RbfError::DegenerateInput { .. }) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Result::<(), RbfError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter         | Default | Range      | Description                                 | Adapter |
//! |-------------------|---------|------------|---------------------------------------------|---------|
//! | `dimension`       | 2       | ≥ 1        | Embedding dimension `D`                     | All     |
//! | `delay`           | 1       | ≥ 1        | Embedding delay `L`                         | All     |
//! | `centers`         | 2       | ≥ 2        | Number of kernels `C`, clamped to the series length | All |
//! | `step`            | 1       | ≥ 1        | Forecast horizon                            | All     |
//! | `insample`        | series  | ≥ 1        | Training prefix, clamped to the series length | All   |
//! | `drift`           | true    | bool       | Relax the centers apart before fitting      | All     |
//! | `window_capacity` | 30      | ≥ window + step + 1 | Sliding-window size                | Online  |
//! | `min_points`      | capacity | 2..=capacity | Values needed before forecasting         | Online  |
//! | `fit_fallback`    | `WindowMean` | enum  | Behavior when a window cannot be fit        | Online  |
//!
//! A series must hold at least `(D − 1)·L + step + 1` values. Setting a
//! parameter twice on the builder is rejected by `build()`.
//!
//! ## Online Adapter
//!
//! ```rust
//! use rbf_rs::prelude::*;
//!
//! let mut model = Rbf::new()
//!     .dimension(2)
//!     .centers(4)
//!     .window_capacity(20)
//!     .adapter(Online)
//!     .build()?;
//!
//! for i in 0..40 {
//!     let value = (i as f64 * 0.3).sin();
//!     if let Some(out) = model.add_point(value)? {
//!         assert!(out.prediction.is_finite());
//!     }
//! }
//! assert_eq!(model.window_size(), 20);
//! # Result::<(), RbfError>::Ok(())
//! ```
//!
//! When the fit on a window fails (for example because every value in it is
//! identical), the default `WindowMean` policy forecasts the window mean and
//! records the error in `OnlineOutput::fallback`; `Propagate` returns it.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate builds without `std` (with `alloc`) by disabling default features:
//!
//! ```toml
//! [dependencies]
//! rbf-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Broomhead, D. S. & Lowe, D. (1988). "Multivariable Functional Interpolation and Adaptive Networks"
//! - Takens, F. (1981). "Detecting Strange Attractors in Turbulence"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the delay-embedding view, the center set and the
// normal-equations workspace.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains rescaling, statistics, distances and the bandwidth estimator,
// the Gaussian kernel and the symmetric solver.
mod math;

// Layer 3: Algorithms - core RBF stages.
//
// Contains center selection, drift relaxation, the normal-equations fitter
// and the network evaluation.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
//
// Contains the configuration, the fit-and-predict pipeline and result assembly.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains execution adapters for different use cases:
// batch (one forecast) and online (sliding window).
mod adapters;

// High-level fluent API for RBF forecasting.
//
// Provides the `Rbf` builder and the `fit_and_predict` function.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard RBF prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use rbf_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online},
        BatchRbf,
        FitFallback::{self, Propagate, WindowMean},
        OnlineOutput, OnlineRbf, RbfBuilder as Rbf, RbfConfig, RbfError, RbfResult,
        fit_and_predict,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
