// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for data nodes and their configuration.
//!
//! Every diagnostic line comes from a message struct with a `Display` impl,
//! so log text is defined once instead of scattered through format strings.
//!
//! # Architecture
//!
//! * `messages::config` - Loading, validating and building nodes from configuration
//! * `messages::node` - Reset and pull events on individual nodes
//!
//! # Usage
//!
//! ```rust
//! use datanode::observability::messages::node::PullFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "sensor offline");
//! let msg = PullFailed {
//!     node: "sensor",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
