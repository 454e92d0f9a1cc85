// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and node construction.
//!
//! This module contains message types for logging events related to:
//! * Config file loading
//! * Node configuration validation
//! * Building data nodes from configuration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use datanode::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "configs/nodes.yaml",
///     node_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub node_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}' with {} data nodes",
            self.path, self.node_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            node_count = self.node_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            node_count = self.node_count,
        )
    }
}

/// A node requested a capability name that is not recognized.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownCapability<'a> {
    pub node: &'a str,
    pub capability: &'a str,
}

impl Display for UnknownCapability<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Data node '{}' requests unknown capability '{}'",
            self.node, self.capability
        )
    }
}

impl StructuredLog for UnknownCapability<'_> {
    fn log(&self) {
        tracing::error!(
            node = self.node,
            capability = self.capability,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unknown_capability",
            span_name = name,
            node = self.node,
            capability = self.capability,
        )
    }
}

/// Node configuration validation finished without errors.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ValidationCompleted {
    pub node_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation completed successfully for {} data nodes",
            self.node_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::info!(node_count = self.node_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "validation_completed",
            span_name = name,
            node_count = self.node_count,
        )
    }
}

/// Node configuration validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}

/// A data node was built from configuration.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct NodeBuilt<'a> {
    pub node: &'a str,
    /// Capability names, outermost first.
    pub capabilities: &'a [&'a str],
}

impl Display for NodeBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.capabilities.is_empty() {
            write!(f, "Built data node '{}' with no capabilities", self.node)
        } else {
            write!(
                f,
                "Built data node '{}' with capabilities [{}]",
                self.node,
                self.capabilities.join(" -> ")
            )
        }
    }
}

impl StructuredLog for NodeBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            node = self.node,
            capabilities = self.capabilities.join(","),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_built",
            span_name = name,
            node = self.node,
            capabilities = self.capabilities.join(","),
        )
    }
}
