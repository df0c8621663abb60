//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the stages of the RBF forecaster:
//! - Evenly spaced center selection
//! - Drift relaxation of the centers
//! - Normal-equations fit of the output weights
//! - Evaluation of the fitted network
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Initial center placement.
pub mod selection;

/// Repulsion of clustered centers.
pub mod drift;

/// Least-squares fit of the output weights.
pub mod fitting;

/// Network evaluation and forecasting.
pub mod prediction;
