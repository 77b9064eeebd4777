//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "ipxgen.toml";

/// Loads and validates an `ipxgen.toml` configuration from a directory.
///
/// Reads `<dir>/ipxgen.toml`, parses it, and validates field values.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates an `ipxgen.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if config.generator.output.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "generator.output must not be empty".to_string(),
        ));
    }
    for (vlnv, path) in &config.library {
        if !vlnv.is_complete() {
            return Err(ConfigError::ValidationError(format!(
                "library entry '{vlnv}' has an empty VLNV field"
            )));
        }
        if path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "library entry '{vlnv}' has an empty path"
            )));
        }
    }
    let validation = &config.validation;
    for (key, names) in [("allow", &validation.allow), ("warn", &validation.warn)] {
        if let Some(name) = names.iter().find(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "validation.{key} contains an empty entry '{name}'"
            )));
        }
    }
    Ok(())
}
