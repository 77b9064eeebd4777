//! Parsing and validation of `ipxgen.toml` generator configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`GeneratorConfig`] holding generation settings, the component library
//! index, and validation allow-lists.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
