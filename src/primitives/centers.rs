//! Storage for RBF centers.
//!
//! Centers live in the normalized embedding space and are stored row-major in
//! a single flat buffer: center `i` occupies `data[i * dimension..(i + 1) * dimension]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::{ChunksExact, ChunksExactMut};
use num_traits::Float;

/// An ordered set of equally sized center vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterSet<T> {
    data: Vec<T>,
    dimension: usize,
}

impl<T: Float> CenterSet<T> {
    /// Create `count` centers of the given dimension, all at the origin.
    pub fn zeros(count: usize, dimension: usize) -> Self {
        Self {
            data: vec![T::zero(); count * dimension],
            dimension,
        }
    }

    /// Wrap a flat row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero or does not divide `data.len()`.
    pub fn from_flat(data: Vec<T>, dimension: usize) -> Self {
        assert!(dimension > 0, "center dimension must be positive");
        assert_eq!(
            data.len() % dimension,
            0,
            "flat center buffer length must be divisible by dimension"
        );
        Self { data, dimension }
    }

    /// Number of centers.
    #[inline]
    pub fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.data.len() / self.dimension
        }
    }

    /// Whether the set holds no centers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dimension of every center.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Center `i`.
    #[inline]
    pub fn center(&self, i: usize) -> &[T] {
        let start = i * self.dimension;
        &self.data[start..start + self.dimension]
    }

    /// Mutable access to center `i`.
    #[inline]
    pub fn center_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.dimension;
        &mut self.data[start..start + self.dimension]
    }

    /// Iterate over centers in order.
    #[inline]
    pub fn iter(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.dimension)
    }

    /// Iterate mutably over centers in order.
    #[inline]
    pub fn iter_mut(&mut self) -> ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.dimension)
    }

    /// Flat row-major view of all coordinates.
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        &self.data
    }

    /// Consume the set and return the flat buffer.
    #[inline]
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    /// Whether two distinct centers share exactly the same coordinates.
    pub fn has_coincident(&self) -> bool {
        let n = self.len();
        (0..n).any(|i| (i + 1..n).any(|k| self.center(i) == self.center(k)))
    }
}
