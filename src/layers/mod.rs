// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability layers and their compile-time composition.
//!
//! A stack is a linear chain: each layer owns the layer directly beneath it
//! and the chain ends in [`BaseAccumulator`]. The chain type is computed from
//! an ordered tuple of capability tags, outermost first:
//!
//! ```
//! use datanode::data;
//! use datanode::layers::{BaseAccumulator, CurrentLayer, Modules, RangeLayer};
//!
//! type Stack = <(data::Current, data::Range) as Modules<f64>>::Stack;
//! let _: CurrentLayer<f64, RangeLayer<f64, BaseAccumulator<f64>>> = <Stack as Default>::default();
//! ```
//!
//! Types that are not capability tags do not implement [`Module`], so an
//! unknown tag is a compile error rather than a silent no-op.

use crate::config::Capability;

// Forwarding impls shared by the layer modules. Each layer implements its own
// capability trait directly and forwards the other three to `self.inner`.
macro_rules! forward_current {
    ($layer:ident) => {
        impl<V, I: $crate::traits::CurrentValue<V>> $crate::traits::CurrentValue<V> for $layer<V, I> {
            fn current(&self) -> Option<&V> {
                self.inner.current()
            }
        }
    };
}

macro_rules! forward_history {
    ($layer:ident) => {
        impl<V, I: $crate::traits::HistoryLog<V>> $crate::traits::HistoryLog<V> for $layer<V, I> {
            fn history(&self) -> &[V] {
                self.inner.history()
            }
        }
    };
}

macro_rules! forward_range {
    ($layer:ident) => {
        impl<V, I: $crate::traits::RangeStatistics> $crate::traits::RangeStatistics for $layer<V, I> {
            fn total(&self) -> f64 {
                self.inner.total()
            }

            fn min(&self) -> f64 {
                self.inner.min()
            }

            fn max(&self) -> f64 {
                self.inner.max()
            }

            fn mean(&self) -> Result<f64, $crate::errors::DataNodeError> {
                self.inner.mean()
            }
        }
    };
}

macro_rules! forward_pull {
    ($layer:ident) => {
        impl<V, I: $crate::traits::PullSource<V>> $crate::traits::PullSource<V> for $layer<V, I> {
            fn add_single_producer(&mut self, producer: $crate::traits::SingleProducer<V>) {
                self.inner.add_single_producer(producer)
            }

            fn add_series_producer(&mut self, producer: $crate::traits::SeriesProducer<V>) {
                self.inner.add_series_producer(producer)
            }

            fn producer_counts(&self) -> (usize, usize) {
                self.inner.producer_counts()
            }

            fn pull(&mut self) -> Result<&[V], $crate::errors::DataNodeError> {
                self.inner.pull()
            }
        }
    };
}

// Every layer forwards the base contract the same way after its own work.
macro_rules! forward_pending {
    () => {
        fn count(&self) -> usize {
            self.inner.count()
        }

        fn pending(&self) -> &[V] {
            self.inner.pending()
        }

        fn pending_mut(&mut self) -> &mut Vec<V> {
            self.inner.pending_mut()
        }
    };
}

mod base;
mod current;
mod log;
mod pull;
mod range;

pub use base::BaseAccumulator;
pub use current::CurrentLayer;
pub use log::LogLayer;
pub use pull::PullLayer;
pub use range::RangeLayer;

pub(crate) use pull::Producers;
pub(crate) use range::RangeState;

/// A capability tag: maps itself onto the layer type that wraps `I`.
pub trait Module {
    type Layer<V, I>;

    const CAPABILITY: Capability;
}

/// An ordered list of capability tags, written as a tuple (outermost first).
pub trait Modules<V> {
    /// The assembled chain, ending in [`BaseAccumulator`].
    type Stack;

    /// The selected capabilities in declaration order.
    fn capabilities() -> Vec<Capability>;
}

impl<V> Modules<V> for () {
    type Stack = BaseAccumulator<V>;

    fn capabilities() -> Vec<Capability> {
        Vec::new()
    }
}

macro_rules! impl_modules {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<V, $head: Module $(, $tail: Module)*> Modules<V> for ($head, $($tail,)*) {
            type Stack = <$head as Module>::Layer<V, <($($tail,)*) as Modules<V>>::Stack>;

            fn capabilities() -> Vec<Capability> {
                vec![$head::CAPABILITY $(, $tail::CAPABILITY)*]
            }
        }

        impl_modules!($($tail),*);
    };
}

impl_modules!(A, B, C, D, E, F, G, H);

/// Capability tags for [`DataNode`](crate::DataNode).
pub mod data {
    use super::{CurrentLayer, LogLayer, Module, PullLayer, RangeLayer};
    use crate::config::Capability;

    /// Track the most recent value.
    #[derive(Debug, Clone, Copy)]
    pub struct Current;

    /// Track every value since the last reset.
    #[derive(Debug, Clone, Copy)]
    pub struct Log;

    /// Track total, min, max and mean.
    #[derive(Debug, Clone, Copy)]
    pub struct Range;

    /// Collect values on request from registered producers.
    #[derive(Debug, Clone, Copy)]
    pub struct Pull;

    impl Module for Current {
        type Layer<V, I> = CurrentLayer<V, I>;
        const CAPABILITY: Capability = Capability::Current;
    }

    impl Module for Log {
        type Layer<V, I> = LogLayer<V, I>;
        const CAPABILITY: Capability = Capability::Log;
    }

    impl Module for Range {
        type Layer<V, I> = RangeLayer<V, I>;
        const CAPABILITY: Capability = Capability::Range;
    }

    impl Module for Pull {
        type Layer<V, I> = PullLayer<V, I>;
        const CAPABILITY: Capability = Capability::Pull;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_follow_declaration_order() {
        assert!(<() as Modules<f64>>::capabilities().is_empty());
        assert_eq!(
            <(data::Range, data::Log, data::Current) as Modules<f64>>::capabilities(),
            vec![Capability::Range, Capability::Log, Capability::Current]
        );
    }

    #[test]
    fn test_stack_type_is_outermost_first() {
        type Stack = <(data::Log, data::Pull) as Modules<i32>>::Stack;
        let stack: LogLayer<i32, PullLayer<i32, BaseAccumulator<i32>>> = <Stack as Default>::default();
        assert_eq!(crate::traits::DataLayer::count(&stack), 0);
    }
}
