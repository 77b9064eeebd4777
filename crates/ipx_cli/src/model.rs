//! Loading of JSON component and design models.

use std::fs;
use std::path::{Path, PathBuf};

use ipx_model::{MetaComponent, MetaDesign};
use serde::de::DeserializeOwned;

/// Errors that can occur while loading a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("failed to read model {}: {source}", path.display())]
    Io {
        /// The model file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid JSON for the expected model.
    #[error("failed to parse model {}: {source}", path.display())]
    Json {
        /// The model file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a component model.
pub fn load_component(path: &Path) -> Result<MetaComponent, ModelError> {
    load(path)
}

/// Loads a design model.
pub fn load_design(path: &Path) -> Result<MetaDesign, ModelError> {
    load(path)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}
