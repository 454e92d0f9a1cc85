pub mod capability;
pub mod layer;

pub use capability::{
    CurrentValue, HistoryLog, PullSource, RangeStatistics, SeriesProducer, SingleProducer,
};
pub use layer::{DataLayer, Numeric};
