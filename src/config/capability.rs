// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

/// One selectable capability layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Most recent value, kept across resets
    Current,
    /// Every value since the last reset
    Log,
    /// Total, min, max and mean
    Range,
    /// Values collected on request from producers
    Pull,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Current,
        Capability::Log,
        Capability::Range,
        Capability::Pull,
    ];

    /// Canonical config name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Current => "current",
            Capability::Log => "log",
            Capability::Range => "range",
            Capability::Pull => "pull",
        }
    }

    /// Parse a config name, ignoring case and surrounding whitespace.
    ///
    /// `history` and `stats` are accepted as aliases of `log` and `range`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "current" => Some(Capability::Current),
            "log" | "history" => Some(Capability::Log),
            "range" | "stats" => Some(Capability::Range),
            "pull" => Some(Capability::Pull),
            _ => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
