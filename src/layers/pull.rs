// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::errors::{DataNodeError, ProducerKind};
use crate::traits::{DataLayer, PullSource, SeriesProducer, SingleProducer};

/// Registered producers, invoked in registration order.
pub(crate) struct Producers<V> {
    singles: Vec<SingleProducer<V>>,
    series: Vec<SeriesProducer<V>>,
}

impl<V> Default for Producers<V> {
    fn default() -> Self {
        Self {
            singles: Vec::new(),
            series: Vec::new(),
        }
    }
}

impl<V> fmt::Debug for Producers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producers")
            .field("single_producers", &self.singles.len())
            .field("series_producers", &self.series.len())
            .finish()
    }
}

impl<V> Producers<V> {
    pub(crate) fn add_single(&mut self, producer: SingleProducer<V>) {
        self.singles.push(producer);
    }

    pub(crate) fn add_series(&mut self, producer: SeriesProducer<V>) {
        self.series.push(producer);
    }

    pub(crate) fn counts(&self) -> (usize, usize) {
        (self.singles.len(), self.series.len())
    }

    /// Replace `out` with single-producer results followed by every series,
    /// in order. On failure `out` is left empty.
    pub(crate) fn run_into(&mut self, out: &mut Vec<V>) -> Result<(), DataNodeError> {
        out.clear();
        let result = self.collect(out);
        if result.is_err() {
            out.clear();
        }
        result
    }

    fn collect(&mut self, out: &mut Vec<V>) -> Result<(), DataNodeError> {
        for (index, producer) in self.singles.iter_mut().enumerate() {
            let value = producer().map_err(|source| DataNodeError::ProducerFailed {
                kind: ProducerKind::Single,
                index,
                source,
            })?;
            out.push(value);
        }
        for (index, producer) in self.series.iter_mut().enumerate() {
            let values = producer().map_err(|source| DataNodeError::ProducerFailed {
                kind: ProducerKind::Series,
                index,
                source,
            })?;
            out.extend(values);
        }
        Ok(())
    }
}

/// Produces values on demand. Pulled values wait in the base accumulator's
/// pending list until the caller records them.
#[derive(Debug)]
pub struct PullLayer<V, I> {
    producers: Producers<V>,
    inner: I,
}

impl<V, I: Default> Default for PullLayer<V, I> {
    fn default() -> Self {
        Self {
            producers: Producers::default(),
            inner: I::default(),
        }
    }
}

impl<V, I: DataLayer<V>> DataLayer<V> for PullLayer<V, I> {
    fn record(&mut self, value: &V) {
        self.inner.record(value);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    forward_pending!();
}

impl<V, I: DataLayer<V>> PullSource<V> for PullLayer<V, I> {
    fn add_single_producer(&mut self, producer: SingleProducer<V>) {
        self.producers.add_single(producer);
    }

    fn add_series_producer(&mut self, producer: SeriesProducer<V>) {
        self.producers.add_series(producer);
    }

    fn producer_counts(&self) -> (usize, usize) {
        self.producers.counts()
    }

    fn pull(&mut self) -> Result<&[V], DataNodeError> {
        self.producers.run_into(self.inner.pending_mut())?;
        Ok(self.inner.pending())
    }
}

forward_current!(PullLayer);
forward_history!(PullLayer);
forward_range!(PullLayer);
