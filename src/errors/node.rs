// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading from or pulling into a data node.

use std::fmt;
use thiserror::Error;

use crate::config::Capability;

/// Error type returned by pull producers.
///
/// `anyhow::Error` and any `std::error::Error + Send + Sync` convert into it
/// with `?` or `.into()`.
pub type ProducerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which producer list a failing producer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerKind {
    Single,
    Series,
}

impl fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProducerKind::Single => write!(f, "single-value"),
            ProducerKind::Series => write!(f, "series"),
        }
    }
}

/// Failures surfaced by data node operations. None of them are retried.
#[derive(Error, Debug)]
pub enum DataNodeError {
    /// A statistic was read before any value was recorded in this epoch.
    #[error("{statistic} is undefined: no values recorded since the last reset")]
    NoData { statistic: &'static str },

    /// A producer failed during a pull; the pull produced no values.
    #[error("{kind} producer #{index} failed during pull: {source}")]
    ProducerFailed {
        kind: ProducerKind,
        index: usize,
        #[source]
        source: ProducerError,
    },

    /// An accessor was called for a capability the node was not built with.
    #[error("data node '{node}' was not configured with the '{capability}' capability")]
    CapabilityNotSelected { node: String, capability: Capability },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_data_message() {
        let err = DataNodeError::NoData { statistic: "mean" };
        assert_eq!(
            err.to_string(),
            "mean is undefined: no values recorded since the last reset"
        );
    }

    #[test]
    fn test_producer_failed_keeps_source() {
        let err = DataNodeError::ProducerFailed {
            kind: ProducerKind::Series,
            index: 2,
            source: "sensor offline".into(),
        };
        assert!(err.to_string().contains("series producer #2 failed"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("sensor offline".to_string()));
    }

    #[test]
    fn test_capability_not_selected_message() {
        let err = DataNodeError::CapabilityNotSelected {
            node: "fitness".to_string(),
            capability: Capability::Log,
        };
        assert_eq!(
            err.to_string(),
            "data node 'fitness' was not configured with the 'log' capability"
        );
    }
}
