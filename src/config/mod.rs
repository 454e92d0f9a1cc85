// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod capability;
mod loader;
mod registry;
mod validation;


pub use capability::Capability;
pub use loader::{load_and_validate_config, load_config, parse_config, Config, ConfigFormat, NodeConfig};
pub use registry::NodeRegistry;
pub use validation::{resolve_capabilities, validate_config};
