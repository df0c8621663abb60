//! Mean and standard deviation of a series.
//!
//! Two-pass population statistics: the mean first, then the root of the
//! average squared deviation from it.

// External dependencies
use num_traits::Float;

/// First two moments of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics<T> {
    /// Arithmetic mean.
    pub mean: T,
    /// Population standard deviation.
    pub std_dev: T,
}

impl<T: Float> Statistics<T> {
    /// Compute mean and standard deviation. An empty slice yields zeros.
    pub fn compute(values: &[T]) -> Self {
        if values.is_empty() {
            return Self {
                mean: T::zero(),
                std_dev: T::zero(),
            };
        }

        let mean = Self::mean(values);
        let n = T::from(values.len()).unwrap_or(T::one());
        let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });

        Self {
            mean,
            std_dev: (sum_sq / n).sqrt(),
        }
    }

    /// Arithmetic mean. An empty slice yields zero.
    pub fn mean(values: &[T]) -> T {
        if values.is_empty() {
            return T::zero();
        }
        let n = T::from(values.len()).unwrap_or(T::one());
        values.iter().fold(T::zero(), |acc, &v| acc + v) / n
    }
}
