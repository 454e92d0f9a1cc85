// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::Capability;

/// Point-in-time report of a [`DynamicDataNode`](crate::DynamicDataNode).
///
/// Fields for capabilities the node does not have are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    pub count: usize,
    pub capabilities: Vec<Capability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSummary {
    pub total: f64,
    pub min: f64,
    pub max: f64,
    /// Absent when the epoch is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_only_present_sections() {
        let summary = NodeSummary {
            name: "fitness".to_string(),
            count: 0,
            capabilities: vec![Capability::Current, Capability::Range],
            current: Some(9.0),
            history: None,
            range: Some(RangeSummary {
                total: 0.0,
                min: 0.0,
                max: 0.0,
                mean: None,
            }),
            pending: None,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "fitness",
                "count": 0,
                "capabilities": ["current", "range"],
                "current": 9.0,
                "range": { "total": 0.0, "min": 0.0, "max": 0.0 }
            })
        );
    }
}
