// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::DataLayer;

/// Innermost layer of every stack: counts values and holds pulled values
/// awaiting a decision to record them.
#[derive(Debug, Clone)]
pub struct BaseAccumulator<V> {
    count: usize,
    pending: Vec<V>,
}

impl<V> BaseAccumulator<V> {
    pub fn new() -> Self {
        Self {
            count: 0,
            pending: Vec::new(),
        }
    }
}

impl<V> Default for BaseAccumulator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DataLayer<V> for BaseAccumulator<V> {
    fn record(&mut self, _value: &V) {
        self.count += 1;
    }

    // Pending values are scratch space for the pull layer and are not epoch state.
    fn reset(&mut self) {
        self.count = 0;
    }

    fn count(&self) -> usize {
        self.count
    }

    fn pending(&self) -> &[V] {
        &self.pending
    }

    fn pending_mut(&mut self) -> &mut Vec<V> {
        &mut self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_any_value() {
        let mut base = BaseAccumulator::<i64>::new();
        base.record(&i64::MIN);
        base.record(&0);
        base.record(&i64::MAX);
        assert_eq!(base.count(), 3);
    }

    #[test]
    fn test_reset_zeroes_count_only() {
        let mut base = BaseAccumulator::<u8>::default();
        base.pending_mut().push(4);
        base.record(&1);
        base.reset();
        assert_eq!(base.count(), 0);
        assert_eq!(base.pending(), &[4u8]);
    }
}
