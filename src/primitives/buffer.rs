//! Scratch space for assembling the normal equations.
//!
//! ## Purpose
//!
//! This module provides `FitBuffer`, the workspace the fitter accumulates into:
//! the dense `(C + 1) x (C + 1)` Gram matrix, the right-hand side, and the
//! per-point kernel responses. The online adapter keeps one buffer alive
//! across updates so repeated fits do not reallocate.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Slots grow on demand but never shrink.
//! * **Fresh contents**: `prepare` zero-fills every slot, so no numerical state
//!   leaks from one fit into the next.
//!
//! ## Invariants
//!
//! * After `prepare(c)`: `gram.len() == (c + 1)^2`, `rhs.len() == c + 1`,
//!   `responses.len() == c + 1` and `responses[0] == 1` (bias regressor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T: Copy> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Resize to `len` elements, all set to `value`. Never shrinks capacity.
    #[inline]
    pub fn fill(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// FitBuffer
// ============================================================================

/// Workspace for one normal-equations assembly.
#[derive(Debug, Clone)]
pub struct FitBuffer<T> {
    /// Row-major Gram matrix, `order * order` entries.
    pub gram: Slot<T>,
    /// Right-hand side, `order` entries.
    pub rhs: Slot<T>,
    /// Kernel responses of the current training point, bias first.
    pub responses: Slot<T>,
    order: usize,
}

impl<T: Float> Default for FitBuffer<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Float> FitBuffer<T> {
    /// Create a buffer sized for `n_centers` centers.
    pub fn new(n_centers: usize) -> Self {
        let order = n_centers + 1;
        Self {
            gram: Slot::new(order * order),
            rhs: Slot::new(order),
            responses: Slot::new(order),
            order: 0,
        }
    }

    /// Zero every slot and size it for `n_centers` centers.
    pub fn prepare(&mut self, n_centers: usize) {
        let order = n_centers + 1;
        self.order = order;
        self.gram.fill(order * order, T::zero());
        self.rhs.fill(order, T::zero());
        self.responses.fill(order, T::zero());
        self.responses[0] = T::one();
    }

    /// Order of the prepared system (centers + 1).
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Copy the lower triangle onto the upper triangle.
    pub fn mirror_lower(&mut self) {
        let order = self.order;
        for i in 0..order {
            for j in 0..i {
                self.gram[j * order + i] = self.gram[i * order + j];
            }
        }
    }

    /// Divide the Gram matrix and right-hand side by `count`.
    pub fn scale(&mut self, count: T) {
        for v in self.gram.iter_mut() {
            *v = *v / count;
        }
        for v in self.rhs.iter_mut() {
            *v = *v / count;
        }
    }
}
