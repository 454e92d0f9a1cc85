// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Set of data nodes to build at runtime.
///
/// # Example
/// ```yaml
/// nodes:
///   - name: fitness
///     capabilities: [current, range]
///   - name: samples
///     description: raw samples awaiting analysis
///     capabilities: [log, range, pull]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,
}

/// Configuration for a single data node.
///
/// # Fields
/// * `name` - Unique node name, used for lookup and in log events
/// * `description` - Free-form note, not interpreted
/// * `capabilities` - Capability names, outermost layer first (defaults empty)
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Format of a config file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; anything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse config text without validating it.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg: Config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content, ConfigFormat::from_path(path))?;

    ConfigLoaded {
        path: &path.display().to_string(),
        node_count: cfg.nodes.len(),
    }
    .log();

    Ok(cfg)
}

/// Load and validate a config file
///
/// Every node name and capability list is checked; all problems are reported
/// together in [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
