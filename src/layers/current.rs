// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{CurrentValue, DataLayer};

/// Remembers the most recently recorded value.
///
/// The value is kept across `reset`, so "current" always means the last value
/// ever seen, not the last value of the epoch.
#[derive(Debug, Clone)]
pub struct CurrentLayer<V, I> {
    current: Option<V>,
    inner: I,
}

impl<V, I: Default> Default for CurrentLayer<V, I> {
    fn default() -> Self {
        Self {
            current: None,
            inner: I::default(),
        }
    }
}

impl<V: Clone, I: DataLayer<V>> DataLayer<V> for CurrentLayer<V, I> {
    fn record(&mut self, value: &V) {
        self.current = Some(value.clone());
        self.inner.record(value);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    forward_pending!();
}

impl<V, I> CurrentValue<V> for CurrentLayer<V, I> {
    fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }
}

forward_history!(CurrentLayer);
forward_range!(CurrentLayer);
forward_pull!(CurrentLayer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::BaseAccumulator;

    type Layer = CurrentLayer<i32, BaseAccumulator<i32>>;

    #[test]
    fn test_current_is_none_before_first_record() {
        let layer = Layer::default();
        assert_eq!(layer.current(), None);
    }

    #[test]
    fn test_current_tracks_last_value_and_delegates() {
        let mut layer = Layer::default();
        layer.record(&3);
        layer.record(&-8);
        assert_eq!(layer.current(), Some(&-8));
        assert_eq!(layer.count(), 2);
    }

    #[test]
    fn test_current_survives_reset() {
        let mut layer = Layer::default();
        layer.record(&11);
        layer.reset();
        assert_eq!(layer.count(), 0);
        assert_eq!(layer.current(), Some(&11));
    }
}
