// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it with its fields attached.
//!
//! # Organization
//!
//! * `config` - Configuration loading, validation and node construction
//! * `node` - Data node reset and pull events
//!
//! # Usage Pattern
//!
//! ```rust
//! use datanode::observability::messages::node::NodeReset;
//! use datanode::observability::messages::StructuredLog;
//!
//! let msg = NodeReset {
//!     node: "fitness",
//!     discarded: 12,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod node;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event at its level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
