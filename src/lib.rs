// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config loading + node registry
pub mod errors;        // error handling
pub mod layers;        // capability layers and the base accumulator
pub mod node;          // static and dynamic facades
pub mod observability;
pub mod traits;        // layer and capability contracts

pub use layers::data;
pub use node::{DataNode, DynamicDataNode};
