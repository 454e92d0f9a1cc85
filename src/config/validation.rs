// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::config::{Capability, Config, NodeConfig};
use crate::errors::ValidationError;
use crate::observability::messages::config::{
    UnknownCapability, ValidationCompleted, ValidationFailed,
};
use crate::observability::messages::StructuredLog;

/// Validates every node in the configuration
///
/// Checks performed:
/// 1. Node names are non-empty and unique, ignoring surrounding whitespace
/// 2. Every capability name is recognized
/// 3. No node lists the same capability twice
///
/// All problems are collected rather than stopping at the first one.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();

    for (index, node) in config.nodes.iter().enumerate() {
        let name = node.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyNodeName { index });
        } else if !seen_names.insert(name) {
            errors.push(ValidationError::DuplicateNodeName {
                node: name.to_string(),
            });
        }

        if let Err(node_errors) = resolve_capabilities(node) {
            errors.extend(node_errors);
        }
    }

    if errors.is_empty() {
        ValidationCompleted {
            node_count: config.nodes.len(),
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

/// Map a node's capability names to capabilities, outermost first.
pub fn resolve_capabilities(node: &NodeConfig) -> Result<Vec<Capability>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut resolved = Vec::with_capacity(node.capabilities.len());

    for name in &node.capabilities {
        match Capability::from_name(name) {
            Some(capability) if resolved.contains(&capability) => {
                errors.push(ValidationError::DuplicateCapability {
                    node: node.name.clone(),
                    capability: capability.as_str().to_string(),
                });
            }
            Some(capability) => resolved.push(capability),
            None => {
                UnknownCapability {
                    node: &node.name,
                    capability: name,
                }
                .log();
                errors.push(ValidationError::UnknownCapability {
                    node: node.name.clone(),
                    capability: name.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, capabilities: &[&str]) -> NodeConfig {
        NodeConfig {
            name: name.to_string(),
            description: None,
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config {
            nodes: vec![node("a", &["current", "range"]), node("b", &[])],
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = Config { nodes: vec![] };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_resolve_keeps_declared_order() {
        let resolved = resolve_capabilities(&node("a", &["pull", "Log", "range"])).unwrap();
        assert_eq!(
            resolved,
            vec![Capability::Pull, Capability::Log, Capability::Range]
        );
    }

    #[test]
    fn test_duplicate_capability_via_alias() {
        let errors = resolve_capabilities(&node("a", &["log", "history"])).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateCapability {
                node: "a".to_string(),
                capability: "log".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_name_ignores_surrounding_whitespace() {
        let config = Config {
            nodes: vec![node(" fitness", &[]), node("fitness\t", &["log"])],
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::DuplicateNodeName {
                node: "fitness".to_string()
            }]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            nodes: vec![
                node("a", &["current"]),
                node("a", &["bogus"]),
                node("  ", &["range", "range"]),
            ],
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::DuplicateNodeName {
            node: "a".to_string()
        }));
        assert!(errors.contains(&ValidationError::UnknownCapability {
            node: "a".to_string(),
            capability: "bogus".to_string(),
        }));
        assert!(errors.contains(&ValidationError::EmptyNodeName { index: 2 }));
        assert!(errors.contains(&ValidationError::DuplicateCapability {
            node: "  ".to_string(),
            capability: "range".to_string(),
        }));
    }
}
