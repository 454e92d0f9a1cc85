// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::Capability;
use crate::errors::{DataNodeError, ProducerError};
use crate::layers::Modules;
use crate::observability::messages::node::{NodeReset, PullCompleted, PullFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{CurrentValue, DataLayer, HistoryLog, PullSource, RangeStatistics};

const DEFAULT_NODE_NAME: &str = "data_node";

/// Data node assembled at compile time from an ordered list of capability tags.
///
/// `M` is a tuple of tags from [`data`](crate::data), outermost layer first.
/// Accessors exist only for the selected capabilities.
///
/// # Example
/// ```
/// use datanode::{data, DataNode};
///
/// let mut node = DataNode::<f64, (data::Current, data::Range)>::new();
/// node.add(5.0);
/// node.add_all([2.0, 9.0]);
///
/// assert_eq!(node.count(), 3);
/// assert_eq!(node.current(), Some(&9.0));
/// assert_eq!(node.min(), 2.0);
/// assert_eq!(node.max(), 9.0);
/// assert_eq!(node.total(), 16.0);
///
/// node.reset();
/// assert_eq!(node.count(), 0);
/// assert_eq!(node.current(), Some(&9.0));
/// ```
///
/// Reading a capability the node was not built with does not compile:
///
/// ```compile_fail
/// use datanode::{data, DataNode};
///
/// let node = DataNode::<f64, (data::Log,)>::new();
/// let _ = node.mean();
/// ```
///
/// Only the tags in [`data`](crate::data) can be composed:
///
/// ```compile_fail
/// use datanode::{data, DataNode};
///
/// struct Variance;
///
/// let _ = DataNode::<f64, (data::Current, Variance)>::new();
/// ```
///
/// Range statistics need a [`Numeric`](crate::traits::Numeric) value type:
///
/// ```compile_fail
/// use datanode::{data, DataNode};
///
/// let _ = DataNode::<String, (data::Range,)>::new();
/// ```
pub struct DataNode<V, M: Modules<V> = ()> {
    name: String,
    stack: M::Stack,
}

impl<V, M> DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V> + Default,
{
    pub fn new() -> Self {
        Self::named(DEFAULT_NODE_NAME)
    }

    /// Create a node whose log events carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::trace!(node = %name, capabilities = ?M::capabilities(), "data node created");
        Self {
            name,
            stack: <M::Stack as Default>::default(),
        }
    }
}

impl<V, M> Default for DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M> DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V>,
{
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selected capabilities, outermost first.
    pub fn capabilities(&self) -> Vec<Capability> {
        M::capabilities()
    }

    /// Record one value through every layer.
    pub fn add(&mut self, value: V) -> &mut Self {
        self.stack.record(&value);
        self
    }

    /// Record each value in order. An empty iterator is a no-op.
    pub fn add_all<T>(&mut self, values: T) -> &mut Self
    where
        T: IntoIterator<Item = V>,
    {
        for value in values {
            self.stack.record(&value);
        }
        self
    }

    /// Clear the derived state of every layer and start a new epoch.
    pub fn reset(&mut self) {
        NodeReset {
            node: &self.name,
            discarded: self.stack.count(),
        }
        .log();
        self.stack.reset();
    }

    pub fn count(&self) -> usize {
        self.stack.count()
    }

    /// `true` until the first value of the epoch is recorded.
    pub fn is_empty(&self) -> bool {
        self.stack.count() == 0
    }
}

impl<V, M> DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V> + CurrentValue<V>,
{
    /// Most recently recorded value; `None` before the first record.
    pub fn current(&self) -> Option<&V> {
        self.stack.current()
    }
}

impl<V, M> DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V> + HistoryLog<V>,
{
    pub fn history(&self) -> &[V] {
        self.stack.history()
    }
}

impl<V, M> DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: DataLayer<V> + RangeStatistics,
{
    pub fn total(&self) -> f64 {
        self.stack.total()
    }

    pub fn mean(&self) -> Result<f64, DataNodeError> {
        self.stack.mean()
    }

    pub fn min(&self) -> f64 {
        self.stack.min()
    }

    pub fn max(&self) -> f64 {
        self.stack.max()
    }
}

impl<V, M> DataNode<V, M>
where
    V: 'static,
    M: Modules<V>,
    M::Stack: DataLayer<V> + PullSource<V>,
{
    pub fn register_single_producer<F>(&mut self, mut producer: F) -> &mut Self
    where
        F: FnMut() -> V + 'static,
    {
        self.stack.add_single_producer(Box::new(move || -> Result<_, ProducerError> { Ok(producer()) }));
        self
    }

    pub fn register_series_producer<F>(&mut self, mut producer: F) -> &mut Self
    where
        F: FnMut() -> Vec<V> + 'static,
    {
        self.stack.add_series_producer(Box::new(move || -> Result<_, ProducerError> { Ok(producer()) }));
        self
    }

    /// Register a producer whose failure aborts the pull it runs in.
    pub fn register_fallible_single_producer<F, E>(&mut self, mut producer: F) -> &mut Self
    where
        F: FnMut() -> Result<V, E> + 'static,
        E: Into<ProducerError>,
    {
        self.stack
            .add_single_producer(Box::new(move || -> Result<_, ProducerError> { producer().map_err(Into::into) }));
        self
    }

    pub fn register_fallible_series_producer<F, E>(&mut self, mut producer: F) -> &mut Self
    where
        F: FnMut() -> Result<Vec<V>, E> + 'static,
        E: Into<ProducerError>,
    {
        self.stack
            .add_series_producer(Box::new(move || -> Result<_, ProducerError> { producer().map_err(Into::into) }));
        self
    }

    /// Run every producer and return what they produced.
    ///
    /// Pulled values are not recorded; pass them to [`add_all`](Self::add_all)
    /// (see [`take_pending`](Self::take_pending)) to incorporate them. When a
    /// producer fails the pull returns its error and no values are kept.
    pub fn pull(&mut self) -> Result<&[V], DataNodeError> {
        let (single_producers, series_producers) = self.stack.producer_counts();
        match self.stack.pull() {
            Ok(values) => {
                PullCompleted {
                    node: &self.name,
                    single_producers,
                    series_producers,
                    value_count: values.len(),
                }
                .log();
                Ok(values)
            }
            Err(error) => {
                PullFailed {
                    node: &self.name,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    /// Values from the last pull that have not been taken yet.
    pub fn pending(&self) -> &[V] {
        self.stack.pending()
    }

    /// Move the pending values out, leaving none behind.
    pub fn take_pending(&mut self) -> Vec<V> {
        std::mem::take(self.stack.pending_mut())
    }

    /// Pull, then record everything pulled. Returns how many values were recorded.
    pub fn pull_and_add(&mut self) -> Result<usize, DataNodeError> {
        self.pull()?;
        let values = self.take_pending();
        let pulled = values.len();
        self.add_all(values);
        Ok(pulled)
    }
}

impl<V, M> fmt::Debug for DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataNode")
            .field("name", &self.name)
            .field("capabilities", &M::capabilities())
            .field("stack", &self.stack)
            .finish()
    }
}

impl<V, M> Clone for DataNode<V, M>
where
    M: Modules<V>,
    M::Stack: Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            stack: self.stack.clone(),
        }
    }
}
