//! Delay-coordinate embedding of a scalar series.
//!
//! ## Purpose
//!
//! This module provides `EmbeddedView`, a read-only accessor that exposes the
//! delay vector of a series at a given index without materializing it:
//!
//! ```text
//! x(n) = (s[n], s[n - delay], ..., s[n - (dim - 1) * delay])
//! ```
//!
//! ## Design notes
//!
//! * **Zero-copy**: Coordinates are read straight from the borrowed series.
//! * **Checked once**: The embedding window is validated against the series
//!   length when the view is constructed; per-point access only debug-asserts.
//!
//! ## Invariants
//!
//! * `dimension >= 1` and `delay >= 1`.
//! * A point at index `n` is valid iff `window() <= n < len()`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RbfError;

// ============================================================================
// Embedded View
// ============================================================================

/// Read-only delay-embedding view over a series.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedView<'a, T> {
    series: &'a [T],
    dimension: usize,
    delay: usize,
    window: usize,
}

impl<'a, T: Float> EmbeddedView<'a, T> {
    /// Create a view, checking that at least one full delay vector fits in the series.
    pub fn new(series: &'a [T], dimension: usize, delay: usize) -> Result<Self, RbfError> {
        if dimension == 0 {
            return Err(RbfError::InvalidDimension(dimension));
        }
        if delay == 0 {
            return Err(RbfError::InvalidDelay(delay));
        }

        let window = Self::window_span(dimension, delay)?;
        if series.len() <= window {
            return Err(RbfError::TooFewPoints {
                got: series.len(),
                min: window + 1,
            });
        }

        Ok(Self {
            series,
            dimension,
            delay,
            window,
        })
    }

    /// Lag reach of one delay vector, `(dimension - 1) * delay`.
    pub fn window_span(dimension: usize, delay: usize) -> Result<usize, RbfError> {
        dimension
            .saturating_sub(1)
            .checked_mul(delay)
            .ok_or(RbfError::InvalidDelay(delay))
    }

    /// Embedding dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Lag reach of one delay vector, also the first valid index.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Length of the underlying series.
    #[inline]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the underlying series is empty (never true for a constructed view).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Index of the most recent delay vector.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.series.len() - 1
    }

    /// Number of valid delay-vector positions minus one (`len - 1 - window`).
    #[inline]
    pub fn span(&self) -> usize {
        self.last_index() - self.window
    }

    /// Raw series value at `index`.
    #[inline]
    pub fn value(&self, index: usize) -> T {
        self.series[index]
    }

    /// The `j`-th lagged coordinate of the delay vector at `n`.
    #[inline]
    pub fn coordinate(&self, n: usize, j: usize) -> T {
        debug_assert!(n >= self.window && n < self.series.len());
        debug_assert!(j < self.dimension);
        self.series[n - j * self.delay]
    }

    /// Iterate over the coordinates of the delay vector at `n`, newest first.
    #[inline]
    pub fn point(&self, n: usize) -> impl Iterator<Item = T> + '_ {
        debug_assert!(n >= self.window && n < self.series.len());
        (0..self.dimension).map(move |j| self.series[n - j * self.delay])
    }
}
