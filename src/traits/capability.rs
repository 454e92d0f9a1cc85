// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Read and control surfaces of the optional capability layers.
//!
//! Each trait is implemented directly by the layer that owns the state and
//! forwarded by every other layer to its inner layer, so a capability is
//! reachable from the outermost layer no matter where it sits in the chain.
//! A stack that never selected the capability does not implement the trait.

use crate::errors::{DataNodeError, ProducerError};

/// Zero-argument producer of a single value.
pub type SingleProducer<V> = Box<dyn FnMut() -> Result<V, ProducerError>>;

/// Zero-argument producer of a sequence of values.
pub type SeriesProducer<V> = Box<dyn FnMut() -> Result<Vec<V>, ProducerError>>;

/// Most recently recorded value. Survives `reset`.
pub trait CurrentValue<V> {
    /// `None` until the first value is recorded.
    fn current(&self) -> Option<&V>;
}

/// Every value recorded since the last reset, in order.
pub trait HistoryLog<V> {
    fn history(&self) -> &[V];
}

/// Running total, minimum and maximum for the current epoch.
///
/// `total`, `min` and `max` read `0.0` in an empty epoch; check the count
/// before treating zero as data.
///
/// Values are compared as-is: a NaN that opens an epoch leaves `min` and
/// `max` at NaN until the next reset, and any NaN makes `total` NaN.
pub trait RangeStatistics {
    fn total(&self) -> f64;

    fn min(&self) -> f64;

    fn max(&self) -> f64;

    /// `total / count`, or [`DataNodeError::NoData`] when nothing was recorded.
    fn mean(&self) -> Result<f64, DataNodeError>;
}

/// On-demand collection through registered producers.
pub trait PullSource<V> {
    fn add_single_producer(&mut self, producer: SingleProducer<V>);

    fn add_series_producer(&mut self, producer: SeriesProducer<V>);

    /// Number of registered (single, series) producers.
    fn producer_counts(&self) -> (usize, usize);

    /// Run every producer and replace the pending values with their output.
    fn pull(&mut self) -> Result<&[V], DataNodeError>;
}
