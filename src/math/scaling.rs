//! Min-max rescaling of a series into the unit interval.
//!
//! ## Purpose
//!
//! Every later stage (center selection, drift relaxation, kernel bandwidth)
//! works in a normalized space where the series spans `[0, 1]`. This module
//! computes that affine map from the full input series and inverts it for the
//! final forecast.
//!
//! ## Invariants
//!
//! * `interval > 0` for every constructed transform.
//! * `forward` maps the series minimum to 0 and the maximum to 1.
//!
//! ## Non-goals
//!
//! * This module does not check for non-finite values (handled by `validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RbfError;

/// Affine map `x -> (x - min) / interval` and its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleTransform<T> {
    /// Minimum of the original series.
    pub min: T,
    /// Range of the original series, `max - min`.
    pub interval: T,
}

impl<T: Float> RescaleTransform<T> {
    /// Compute the transform from the range of `series`.
    ///
    /// Fails with [`RbfError::DegenerateInput`] when all values are identical
    /// and with [`RbfError::EmptyInput`] on an empty series.
    pub fn fit(series: &[T]) -> Result<Self, RbfError> {
        let (&first, rest) = series.split_first().ok_or(RbfError::EmptyInput)?;

        let (min, max) = rest.iter().fold((first, first), |(lo, hi), &x| {
            (if x < lo { x } else { lo }, if x > hi { x } else { hi })
        });

        let interval = max - min;
        if interval == T::zero() {
            return Err(RbfError::DegenerateInput {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { min, interval })
    }

    /// Rescale `series` in place and return the transform that was applied.
    pub fn rescale_in_place(series: &mut [T]) -> Result<Self, RbfError> {
        let transform = Self::fit(series)?;
        for x in series.iter_mut() {
            *x = transform.forward(*x);
        }
        Ok(transform)
    }

    /// Map an original value into the normalized space.
    #[inline]
    pub fn forward(&self, x: T) -> T {
        (x - self.min) / self.interval
    }

    /// Map a normalized value back to the original scale.
    #[inline]
    pub fn inverse(&self, y: T) -> T {
        y * self.interval + self.min
    }

    /// Map a normalized length (distance, bandwidth, weight) back to the original scale.
    #[inline]
    pub fn inverse_scale(&self, d: T) -> T {
        d * self.interval
    }
}
