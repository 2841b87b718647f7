//! Configuration management module.
//!
//! Handles JSON configuration file loading and validation.

mod service;
mod types;
mod validation;

pub use service::ConfigService;
pub use types::{Config, HookDefinition, DEFAULT_CONFIG_PATH};
