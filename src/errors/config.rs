// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a node configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A node lists a capability name that is not recognized
    UnknownCapability {
        /// The node that requested the capability
        node: String,
        /// The name as written in the config
        capability: String,
    },
    /// A node lists the same capability more than once
    DuplicateCapability {
        node: String,
        capability: String,
    },
    /// Two nodes share a name
    DuplicateNodeName {
        node: String,
    },
    /// A node has an empty or whitespace-only name
    EmptyNodeName {
        /// Position of the node in the config
        index: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownCapability { node, capability } => {
                write!(
                    f,
                    "Node '{}' requests unknown capability '{}' (expected one of: current, log, range, pull)",
                    node, capability
                )
            }
            ValidationError::DuplicateCapability { node, capability } => {
                write!(
                    f,
                    "Node '{}' lists capability '{}' more than once",
                    node, capability
                )
            }
            ValidationError::DuplicateNodeName { node } => {
                write!(f, "Duplicate node name: '{}'", node)
            }
            ValidationError::EmptyNodeName { index } => {
                write!(f, "Node at position {} has an empty name", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while loading a node configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
