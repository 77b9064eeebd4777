//! Configuration types deserialized from `ipxgen.toml`.

use ipx_common::Vlnv;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The top-level configuration parsed from `ipxgen.toml`.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// HDL generation settings.
    #[serde(default)]
    pub generator: GeneratorSection,
    /// Maps component VLNVs to the IP-XACT XML files they were read from.
    #[serde(default)]
    pub library: BTreeMap<Vlnv, PathBuf>,
    /// Parameter validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// The `[generator]` section.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    /// Name written into the `Created by` line of generated file headers.
    pub user: String,
    /// Tool version written into generated file headers.
    pub tool_version: String,
    /// Generator version written into generated file headers.
    pub generator_version: String,
    /// Whether interconnections with an interface type become SystemVerilog
    /// interface instantiations.
    pub generate_interfaces: bool,
    /// Directory generated `.v` files are written to.
    pub output: PathBuf,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            user: String::new(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            generate_interfaces: false,
            output: PathBuf::from("."),
        }
    }
}

/// The `[validation]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Violation names (e.g. `value-id`) whose findings are suppressed.
    pub allow: Vec<String>,
    /// Violation names reported as warnings instead of errors.
    pub warn: Vec<String>,
    /// Treat warnings as errors when deciding the exit status.
    pub deny_warnings: bool,
}

impl ValidationConfig {
    /// Returns `true` if findings of the named violation are suppressed.
    pub fn is_allowed(&self, violation: &str) -> bool {
        self.allow.iter().any(|a| a == violation)
    }

    /// Returns `true` if findings of the named violation are downgraded to warnings.
    pub fn is_warned(&self, violation: &str) -> bool {
        self.warn.iter().any(|w| w == violation)
    }
}
