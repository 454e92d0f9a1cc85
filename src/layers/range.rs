// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use crate::errors::DataNodeError;
use crate::traits::{DataLayer, Numeric, RangeStatistics};

/// Running total, minimum and maximum of one epoch.
///
/// All three read `0.0` after a reset. `min`/`max` take the first value of an
/// epoch as-is, so the caller passes how many values were already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RangeState {
    pub(crate) total: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl RangeState {
    pub(crate) fn observe(&mut self, value: f64, seen: usize) {
        self.total += value;
        if seen == 0 || value < self.min {
            self.min = value;
        }
        if seen == 0 || value > self.max {
            self.max = value;
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn mean(&self, count: usize) -> Result<f64, DataNodeError> {
        if count == 0 {
            return Err(DataNodeError::NoData { statistic: "mean" });
        }
        Ok(self.total / count as f64)
    }
}

/// Tracks total, min, max and mean of numeric values.
#[derive(Debug, Clone)]
pub struct RangeLayer<V, I> {
    state: RangeState,
    inner: I,
    _value: PhantomData<fn(V)>,
}

impl<V, I: Default> Default for RangeLayer<V, I> {
    fn default() -> Self {
        Self {
            state: RangeState::default(),
            inner: I::default(),
            _value: PhantomData,
        }
    }
}

impl<V: Numeric, I: DataLayer<V>> DataLayer<V> for RangeLayer<V, I> {
    // The count must be read before delegating: only the base increments it.
    fn record(&mut self, value: &V) {
        self.state.observe(value.to_f64(), self.inner.count());
        self.inner.record(value);
    }

    fn reset(&mut self) {
        self.state.clear();
        self.inner.reset();
    }

    forward_pending!();
}

impl<V, I: DataLayer<V>> RangeStatistics for RangeLayer<V, I> {
    fn total(&self) -> f64 {
        self.state.total
    }

    fn min(&self) -> f64 {
        self.state.min
    }

    fn max(&self) -> f64 {
        self.state.max
    }

    fn mean(&self) -> Result<f64, DataNodeError> {
        self.state.mean(self.inner.count())
    }
}

forward_current!(RangeLayer);
forward_history!(RangeLayer);
forward_pull!(RangeLayer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::BaseAccumulator;

    type Layer = RangeLayer<i32, BaseAccumulator<i32>>;

    #[test]
    fn test_first_value_sets_min_and_max() {
        let mut layer = Layer::default();
        layer.record(&7);
        assert_eq!(layer.min(), 7.0);
        assert_eq!(layer.max(), 7.0);
        assert_eq!(layer.total(), 7.0);
    }

    #[test]
    fn test_first_value_after_reset_replaces_zero_bounds() {
        let mut layer = Layer::default();
        layer.record(&-4);
        layer.reset();
        layer.record(&12);
        // A zero left over from reset must not win the min comparison.
        assert_eq!(layer.min(), 12.0);
        assert_eq!(layer.max(), 12.0);
    }

    #[test]
    fn test_range_over_mixed_values() {
        let mut layer = Layer::default();
        for v in [3, -2, 10, 4] {
            layer.record(&v);
        }
        assert_eq!(layer.min(), -2.0);
        assert_eq!(layer.max(), 10.0);
        assert_eq!(layer.total(), 15.0);
        assert_eq!(layer.mean().unwrap(), 3.75);
    }

    #[test]
    fn test_mean_without_data_is_an_error() {
        let layer = Layer::default();
        assert!(matches!(
            layer.mean(),
            Err(DataNodeError::NoData { statistic: "mean" })
        ));
    }

    #[test]
    fn test_reset_zeroes_statistics() {
        let mut layer = Layer::default();
        layer.record(&5);
        layer.record(&6);
        layer.reset();
        assert_eq!(layer.count(), 0);
        assert_eq!(layer.total(), 0.0);
        assert_eq!(layer.min(), 0.0);
        assert_eq!(layer.max(), 0.0);
    }

    #[test]
    fn test_nan_opening_an_epoch_sticks_until_reset() {
        let mut layer = RangeLayer::<f64, BaseAccumulator<f64>>::default();
        for v in [f64::NAN, 1.0, -3.0, 7.0] {
            layer.record(&v);
        }
        assert!(layer.min().is_nan());
        assert!(layer.max().is_nan());
        assert!(layer.total().is_nan());

        layer.reset();
        layer.record(&2.0);
        assert_eq!(layer.min(), 2.0);
        assert_eq!(layer.max(), 2.0);
    }
}
