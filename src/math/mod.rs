//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the forecaster:
//! - Min-max rescaling and its inverse
//! - Distances and the kernel bandwidth
//! - The Gaussian kernel
//! - Dense symmetric solves
//! - Summary statistics
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Min-max rescaling into the unit interval.
pub mod scaling;

/// Mean and standard deviation.
pub mod statistics;

/// Squared distances and the bandwidth estimator.
pub mod distance;

/// Gaussian radial basis kernel.
pub mod kernel;

/// Linear algebra backend.
pub mod linalg;
