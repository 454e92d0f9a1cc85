// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::{DataLayer, HistoryLog};

/// Keeps every value recorded in the current epoch, in order.
#[derive(Debug, Clone)]
pub struct LogLayer<V, I> {
    history: Vec<V>,
    inner: I,
}

impl<V, I: Default> Default for LogLayer<V, I> {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            inner: I::default(),
        }
    }
}

impl<V: Clone, I: DataLayer<V>> DataLayer<V> for LogLayer<V, I> {
    fn record(&mut self, value: &V) {
        self.history.push(value.clone());
        self.inner.record(value);
    }

    fn reset(&mut self) {
        self.history.clear();
        self.inner.reset();
    }

    forward_pending!();
}

impl<V, I> HistoryLog<V> for LogLayer<V, I> {
    fn history(&self) -> &[V] {
        &self.history
    }
}

forward_current!(LogLayer);
forward_range!(LogLayer);
forward_pull!(LogLayer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::BaseAccumulator;

    #[test]
    fn test_history_keeps_order_and_duplicates() {
        let mut layer = LogLayer::<&str, BaseAccumulator<&str>>::default();
        for word in ["b", "a", "b"] {
            layer.record(&word);
        }
        assert_eq!(layer.history(), &["b", "a", "b"]);
        assert_eq!(layer.count(), 3);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut layer = LogLayer::<u32, BaseAccumulator<u32>>::default();
        layer.record(&1);
        layer.record(&2);
        layer.reset();
        assert!(layer.history().is_empty());
        assert_eq!(layer.count(), 0);

        layer.record(&9);
        assert_eq!(layer.history(), &[9u32]);
    }
}
