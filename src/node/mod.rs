// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dynamic;
mod stack;
mod summary;


pub use dynamic::DynamicDataNode;
pub use stack::DataNode;
pub use summary::{NodeSummary, RangeSummary};
