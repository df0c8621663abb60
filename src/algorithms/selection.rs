//! Initial placement of the RBF centers.
//!
//! ## Purpose
//!
//! This module places the centers on delay vectors of the normalized series,
//! spread evenly over the usable index range so the first center sits on the
//! earliest complete delay vector and the last one on the latest.
//!
//! ## Key concepts
//!
//! * **Anchor index**: Center `i` copies the delay vector anchored at
//!
//! ```text
//! n_i = (D − 1)·L + ⌊ i · span / (C − 1) ⌋,   span = len − 1 − (D − 1)·L
//! ```
//!
//! ## Invariants
//!
//! * Every anchor is a valid embedding index, so centers start in `[0, 1]^D`.
//! * Anchors are non-decreasing in `i`.
//!
//! ## Non-goals
//!
//! * This module does not move the centers (handled by `drift`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::centers::CenterSet;
use crate::primitives::embedding::EmbeddedView;

/// Evenly spaced center placement.
pub struct CenterSelector;

impl CenterSelector {
    /// Embedding index the `i`-th of `count` centers is copied from.
    ///
    /// A single center sits on the first complete delay vector.
    #[inline]
    pub fn anchor<T: Float>(view: &EmbeddedView<'_, T>, i: usize, count: usize) -> usize {
        if count < 2 {
            return view.window();
        }
        view.window() + (i * view.span()) / (count - 1)
    }

    /// Copy `count` evenly spaced delay vectors of `view` into a new center set.
    pub fn select<T: Float>(view: &EmbeddedView<'_, T>, count: usize) -> CenterSet<T> {
        let mut centers = CenterSet::zeros(count, view.dimension());
        for (i, center) in centers.iter_mut().enumerate() {
            let n = Self::anchor(view, i, count);
            for (coord, value) in center.iter_mut().zip(view.point(n)) {
                *coord = value;
            }
        }
        centers
    }
}
