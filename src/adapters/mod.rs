//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer exposes the execution modes built on top of the engine:
//! - Batch: one forecast from a complete series
//! - Online: a forecast per new value over a sliding window
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot forecasting over a complete series.
pub mod batch;

/// Sliding-window forecasting.
pub mod online;
