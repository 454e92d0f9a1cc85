// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::Capability;
use crate::errors::{DataNodeError, ProducerError};
use crate::layers::{Producers, RangeState};
use crate::node::summary::{NodeSummary, RangeSummary};
use crate::observability::messages::node::{NodeReset, PullCompleted, PullFailed};
use crate::observability::messages::StructuredLog;

/// Runtime state of one selected capability.
enum DynamicLayer {
    Current(Option<f64>),
    Log(Vec<f64>),
    Range(RangeState),
    Pull(Producers<f64>),
}

impl DynamicLayer {
    fn new(capability: Capability) -> Self {
        match capability {
            Capability::Current => DynamicLayer::Current(None),
            Capability::Log => DynamicLayer::Log(Vec::new()),
            Capability::Range => DynamicLayer::Range(RangeState::default()),
            Capability::Pull => DynamicLayer::Pull(Producers::default()),
        }
    }

    fn capability(&self) -> Capability {
        match self {
            DynamicLayer::Current(_) => Capability::Current,
            DynamicLayer::Log(_) => Capability::Log,
            DynamicLayer::Range(_) => Capability::Range,
            DynamicLayer::Pull(_) => Capability::Pull,
        }
    }
}

fn not_selected(node: &str, capability: Capability) -> DataNodeError {
    DataNodeError::CapabilityNotSelected {
        node: node.to_string(),
        capability,
    }
}

/// Data node over `f64` values whose capabilities are chosen at runtime.
///
/// Layers run outermost first, exactly like [`DataNode`](crate::DataNode), but
/// reading a capability the node was not built with fails with
/// [`DataNodeError::CapabilityNotSelected`] instead of failing to compile.
pub struct DynamicDataNode {
    name: String,
    layers: Vec<DynamicLayer>,
    count: usize,
    pending: Vec<f64>,
}

impl DynamicDataNode {
    /// Build a node with the given capabilities, outermost first.
    pub fn new(name: impl Into<String>, capabilities: &[Capability]) -> Self {
        Self {
            name: name.into(),
            layers: capabilities.iter().copied().map(DynamicLayer::new).collect(),
            count: 0,
            pending: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        self.layers.iter().map(DynamicLayer::capability).collect()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.layers.iter().any(|layer| layer.capability() == capability)
    }

    pub fn add(&mut self, value: f64) -> &mut Self {
        let seen = self.count;
        for layer in &mut self.layers {
            match layer {
                DynamicLayer::Current(current) => *current = Some(value),
                DynamicLayer::Log(history) => history.push(value),
                DynamicLayer::Range(range) => range.observe(value, seen),
                DynamicLayer::Pull(_) => {}
            }
        }
        self.count += 1;
        self
    }

    pub fn add_all<T>(&mut self, values: T) -> &mut Self
    where
        T: IntoIterator<Item = f64>,
    {
        for value in values {
            self.add(value);
        }
        self
    }

    pub fn reset(&mut self) {
        NodeReset {
            node: &self.name,
            discarded: self.count,
        }
        .log();
        for layer in &mut self.layers {
            match layer {
                DynamicLayer::Current(_) | DynamicLayer::Pull(_) => {}
                DynamicLayer::Log(history) => history.clear(),
                DynamicLayer::Range(range) => range.clear(),
            }
        }
        self.count = 0;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Most recent value; `Ok(None)` before the first record.
    pub fn current(&self) -> Result<Option<f64>, DataNodeError> {
        self.layers
            .iter()
            .find_map(|layer| match layer {
                DynamicLayer::Current(current) => Some(*current),
                _ => None,
            })
            .ok_or_else(|| not_selected(&self.name, Capability::Current))
    }

    pub fn history(&self) -> Result<&[f64], DataNodeError> {
        self.layers
            .iter()
            .find_map(|layer| match layer {
                DynamicLayer::Log(history) => Some(history.as_slice()),
                _ => None,
            })
            .ok_or_else(|| not_selected(&self.name, Capability::Log))
    }

    fn range(&self) -> Result<&RangeState, DataNodeError> {
        self.layers
            .iter()
            .find_map(|layer| match layer {
                DynamicLayer::Range(range) => Some(range),
                _ => None,
            })
            .ok_or_else(|| not_selected(&self.name, Capability::Range))
    }

    pub fn total(&self) -> Result<f64, DataNodeError> {
        Ok(self.range()?.total)
    }

    pub fn min(&self) -> Result<f64, DataNodeError> {
        Ok(self.range()?.min)
    }

    pub fn max(&self) -> Result<f64, DataNodeError> {
        Ok(self.range()?.max)
    }

    pub fn mean(&self) -> Result<f64, DataNodeError> {
        self.range()?.mean(self.count)
    }

    fn producers_mut(&mut self) -> Result<&mut Producers<f64>, DataNodeError> {
        let name = &self.name;
        self.layers
            .iter_mut()
            .find_map(|layer| match layer {
                DynamicLayer::Pull(producers) => Some(producers),
                _ => None,
            })
            .ok_or_else(|| not_selected(name, Capability::Pull))
    }

    pub fn register_single_producer<F>(&mut self, mut producer: F) -> Result<&mut Self, DataNodeError>
    where
        F: FnMut() -> f64 + 'static,
    {
        self.producers_mut()?
            .add_single(Box::new(move || -> Result<_, ProducerError> { Ok(producer()) }));
        Ok(self)
    }

    pub fn register_series_producer<F>(&mut self, mut producer: F) -> Result<&mut Self, DataNodeError>
    where
        F: FnMut() -> Vec<f64> + 'static,
    {
        self.producers_mut()?
            .add_series(Box::new(move || -> Result<_, ProducerError> { Ok(producer()) }));
        Ok(self)
    }

    pub fn register_fallible_single_producer<F, E>(
        &mut self,
        mut producer: F,
    ) -> Result<&mut Self, DataNodeError>
    where
        F: FnMut() -> Result<f64, E> + 'static,
        E: Into<ProducerError>,
    {
        self.producers_mut()?
            .add_single(Box::new(move || -> Result<_, ProducerError> { producer().map_err(Into::into) }));
        Ok(self)
    }

    pub fn register_fallible_series_producer<F, E>(
        &mut self,
        mut producer: F,
    ) -> Result<&mut Self, DataNodeError>
    where
        F: FnMut() -> Result<Vec<f64>, E> + 'static,
        E: Into<ProducerError>,
    {
        self.producers_mut()?
            .add_series(Box::new(move || -> Result<_, ProducerError> { producer().map_err(Into::into) }));
        Ok(self)
    }

    /// Run every producer; the results are pending, not recorded.
    pub fn pull(&mut self) -> Result<&[f64], DataNodeError> {
        let Self {
            name,
            layers,
            pending,
            ..
        } = self;
        let name: &str = name;
        let producers = layers
            .iter_mut()
            .find_map(|layer| match layer {
                DynamicLayer::Pull(producers) => Some(producers),
                _ => None,
            })
            .ok_or_else(|| not_selected(name, Capability::Pull))?;

        let (single_producers, series_producers) = producers.counts();
        if let Err(error) = producers.run_into(pending) {
            PullFailed {
                node: name,
                error: &error,
            }
            .log();
            return Err(error);
        }

        PullCompleted {
            node: name,
            single_producers,
            series_producers,
            value_count: pending.len(),
        }
        .log();
        Ok(pending.as_slice())
    }

    pub fn pending(&self) -> &[f64] {
        &self.pending
    }

    pub fn take_pending(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.pending)
    }

    /// Pull, then record everything pulled. Returns how many values were recorded.
    pub fn pull_and_add(&mut self) -> Result<usize, DataNodeError> {
        self.pull()?;
        let values = self.take_pending();
        let pulled = values.len();
        self.add_all(values);
        Ok(pulled)
    }

    /// Snapshot of the node's state for reporting.
    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            name: self.name.clone(),
            count: self.count,
            capabilities: self.capabilities(),
            current: self.current().ok().flatten(),
            history: self.history().ok().map(<[f64]>::to_vec),
            range: self.range().ok().map(|range| RangeSummary {
                total: range.total,
                min: range.min,
                max: range.max,
                mean: range.mean(self.count).ok(),
            }),
            pending: self
                .has_capability(Capability::Pull)
                .then(|| self.pending.clone()),
        }
    }
}

impl fmt::Debug for DynamicDataNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicDataNode")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities())
            .field("count", &self.count)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_and_range_scenario() {
        let mut node = DynamicDataNode::new("fitness", &[Capability::Current, Capability::Range]);
        node.add(5.0);
        node.add_all([2.0, 9.0]);

        assert_eq!(node.count(), 3);
        assert_eq!(node.current().unwrap(), Some(9.0));
        assert_eq!(node.min().unwrap(), 2.0);
        assert_eq!(node.max().unwrap(), 9.0);
        assert_eq!(node.total().unwrap(), 16.0);
        assert_eq!(node.mean().unwrap(), 16.0 / 3.0);

        node.reset();
        assert_eq!(node.count(), 0);
        assert_eq!(node.min().unwrap(), 0.0);
        assert_eq!(node.max().unwrap(), 0.0);
        assert_eq!(node.total().unwrap(), 0.0);
        assert_eq!(node.current().unwrap(), Some(9.0));
    }

    #[test]
    fn test_unselected_capability_fails_fast() {
        let mut node = DynamicDataNode::new("counter", &[]);
        node.add(1.0);

        assert_eq!(node.count(), 1);
        assert!(matches!(
            node.history(),
            Err(DataNodeError::CapabilityNotSelected { capability: Capability::Log, .. })
        ));
        assert!(node.mean().is_err());
        assert!(node.register_single_producer(|| 1.0).is_err());
        assert!(matches!(
            node.pull(),
            Err(DataNodeError::CapabilityNotSelected { capability: Capability::Pull, .. })
        ));
    }

    #[test]
    fn test_current_before_first_record() {
        let node = DynamicDataNode::new("n", &[Capability::Current]);
        assert_eq!(node.current().unwrap(), None);
    }

    #[test]
    fn test_mean_in_empty_epoch() {
        let node = DynamicDataNode::new("n", &[Capability::Range]);
        assert!(matches!(node.mean(), Err(DataNodeError::NoData { .. })));
    }

    #[test]
    fn test_pull_order_and_count() {
        let mut node = DynamicDataNode::new("n", &[Capability::Pull, Capability::Log]);
        node.register_series_producer(|| vec![3.0, 4.0])
            .unwrap()
            .register_single_producer(|| 1.0)
            .unwrap()
            .register_single_producer(|| 2.0)
            .unwrap();

        assert_eq!(node.pull().unwrap(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(node.count(), 0);

        assert_eq!(node.pull_and_add().unwrap(), 4);
        assert_eq!(node.history().unwrap(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(node.pending().is_empty());
    }

    #[test]
    fn test_failed_pull_keeps_nothing() {
        let mut node = DynamicDataNode::new("n", &[Capability::Pull]);
        node.register_single_producer(|| 1.0).unwrap();
        node.register_fallible_single_producer(|| Err::<f64, _>("offline"))
            .unwrap();

        assert!(matches!(node.pull(), Err(DataNodeError::ProducerFailed { index: 1, .. })));
        assert!(node.pending().is_empty());
    }

    #[test]
    fn test_summary_reflects_capabilities() {
        let mut node = DynamicDataNode::new("n", &[Capability::Log, Capability::Range]);
        node.add_all([1.0, 3.0]);

        let summary = node.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.current, None);
        assert_eq!(summary.history, Some(vec![1.0, 3.0]));
        assert_eq!(summary.range.as_ref().and_then(|r| r.mean), Some(2.0));
        assert_eq!(summary.pending, None);
    }
}
