// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for data node lifecycle events.
//!
//! Recording a value is not logged; it is the hot path.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Data node reset, ending an epoch.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct NodeReset<'a> {
    pub node: &'a str,
    /// Values counted in the epoch that just ended.
    pub discarded: usize,
}

impl Display for NodeReset<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Data node '{}' reset after {} values",
            self.node, self.discarded
        )
    }
}

impl StructuredLog for NodeReset<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            discarded = self.discarded,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_reset",
            span_name = name,
            node = self.node,
            discarded = self.discarded,
        )
    }
}

/// Pull completed and its values are pending.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
///
/// # Example
/// ```
/// use datanode::observability::messages::node::PullCompleted;
///
/// let msg = PullCompleted {
///     node: "samples",
///     single_producers: 2,
///     series_producers: 1,
///     value_count: 4,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Data node 'samples' pulled 4 values from 2 single and 1 series producers"
/// );
/// ```
pub struct PullCompleted<'a> {
    pub node: &'a str,
    pub single_producers: usize,
    pub series_producers: usize,
    pub value_count: usize,
}

impl Display for PullCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Data node '{}' pulled {} values from {} single and {} series producers",
            self.node, self.value_count, self.single_producers, self.series_producers
        )
    }
}

impl StructuredLog for PullCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            single_producers = self.single_producers,
            series_producers = self.series_producers,
            value_count = self.value_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pull",
            span_name = name,
            node = self.node,
            single_producers = self.single_producers,
            series_producers = self.series_producers,
            value_count = self.value_count,
        )
    }
}

/// A producer failed and the pull was abandoned.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PullFailed<'a> {
    pub node: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PullFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Data node '{}' pull failed: {}", self.node, self.error)
    }
}

impl StructuredLog for PullFailed<'_> {
    fn log(&self) {
        tracing::error!(
            node = self.node,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pull_failed",
            span_name = name,
            node = self.node,
            error = %self.error,
        )
    }
}
