// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::config::{validate_config, resolve_capabilities, Config};
use crate::errors::ConfigError;
use crate::node::{DynamicDataNode, NodeSummary};
use crate::observability::messages::config::NodeBuilt;
use crate::observability::messages::StructuredLog;

/// Every data node built from a configuration, looked up by name.
///
/// Iteration follows configuration order.
///
/// # Example
/// ```
/// use datanode::config::{parse_config, ConfigFormat, NodeRegistry};
///
/// let config = parse_config(
///     "nodes:\n  - name: fitness\n    capabilities: [current, range]\n",
///     ConfigFormat::Yaml,
/// ).unwrap();
/// let mut registry = NodeRegistry::from_config(&config).unwrap();
///
/// registry.add_to_all([5.0, 2.0, 9.0]);
/// let fitness = registry.get("fitness").unwrap();
/// assert_eq!(fitness.max().unwrap(), 9.0);
/// ```
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<DynamicDataNode>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and build every node it describes.
    ///
    /// Node names are registered without surrounding whitespace.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        validate_config(cfg).map_err(ConfigError::Invalid)?;

        let mut registry = Self::new();
        for node_cfg in &cfg.nodes {
            let capabilities = resolve_capabilities(node_cfg).map_err(ConfigError::Invalid)?;
            let name = node_cfg.name.trim();
            let names: Vec<&str> = capabilities.iter().map(|c| c.as_str()).collect();
            NodeBuilt {
                node: name,
                capabilities: &names,
            }
            .log();
            registry.insert(DynamicDataNode::new(name, &capabilities));
        }
        Ok(registry)
    }

    /// Add a node, replacing any node with the same name.
    pub fn insert(&mut self, node: DynamicDataNode) {
        match self.index.get(node.name()) {
            Some(&position) => self.nodes[position] = node,
            None => {
                self.index.insert(node.name().to_string(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DynamicDataNode> {
        let position = *self.index.get(name)?;
        self.nodes.get(position)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DynamicDataNode> {
        let position = *self.index.get(name)?;
        self.nodes.get_mut(position)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(DynamicDataNode::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DynamicDataNode> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DynamicDataNode> {
        self.nodes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record the same values, in order, into every node.
    pub fn add_to_all<T>(&mut self, values: T)
    where
        T: IntoIterator<Item = f64>,
        T::IntoIter: Clone,
    {
        let values = values.into_iter();
        for node in &mut self.nodes {
            node.add_all(values.clone());
        }
    }

    pub fn reset_all(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    pub fn summaries(&self) -> Vec<NodeSummary> {
        self.nodes.iter().map(DynamicDataNode::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, Capability, ConfigFormat};

    fn registry(yaml: &str) -> Result<NodeRegistry, ConfigError> {
        NodeRegistry::from_config(&parse_config(yaml, ConfigFormat::Yaml).unwrap())
    }

    #[test]
    fn test_builds_nodes_in_config_order() {
        let registry = registry(
            r#"
nodes:
  - name: b
    capabilities: [log]
  - name: a
    capabilities: [range, current]
"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            registry.get("a").unwrap().capabilities(),
            vec![Capability::Range, Capability::Current]
        );
        assert!(!registry.contains("c"));
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let result = registry(
            r#"
nodes:
  - name: a
    capabilities: [current, current]
"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(errors)) if errors.len() == 1));
    }

    #[test]
    fn test_add_and_reset_all() {
        let mut registry = registry(
            r#"
nodes:
  - name: counter
  - name: stats
    capabilities: [range]
"#,
        )
        .unwrap();

        registry.add_to_all(vec![1.0, 2.0, 3.0]);
        assert!(registry.iter().all(|node| node.count() == 3));
        assert_eq!(registry.get("stats").unwrap().total().unwrap(), 6.0);

        registry.reset_all();
        assert!(registry.iter().all(|node| node.is_empty()));
    }

    #[test]
    fn test_padded_name_is_found_trimmed() {
        let registry = registry(
            r#"
nodes:
  - name: " fitness "
    capabilities: [current]
"#,
        )
        .unwrap();

        assert!(registry.contains("fitness"));
        assert_eq!(registry.get("fitness").unwrap().name(), "fitness");
        assert!(registry.get(" fitness ").is_none());
    }

    #[test]
    fn test_padded_duplicate_name_is_rejected() {
        let result = registry(
            r#"
nodes:
  - name: " fitness"
  - name: fitness
"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(errors)) if errors.len() == 1));
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut registry = NodeRegistry::new();
        registry.insert(DynamicDataNode::new("x", &[]));
        registry.insert(DynamicDataNode::new("x", &[Capability::Log]));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("x").unwrap().has_capability(Capability::Log));
    }

    #[test]
    fn test_get_mut_records_into_one_node() {
        let mut registry = registry("nodes:\n  - name: a\n  - name: b\n").unwrap();
        registry.get_mut("a").unwrap().add(4.0);

        let summaries = registry.summaries();
        assert_eq!(summaries[0].count, 1);
        assert_eq!(summaries[1].count, 0);
    }
}
