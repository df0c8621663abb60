//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a forecast: it validates the configuration and
//! the series, runs the algorithm stages in order and assembles the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configuration and the fit-and-predict pipeline.
pub mod executor;

/// Result type.
pub mod output;

/// Parameter and input validation.
pub mod validator;
