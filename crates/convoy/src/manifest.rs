//! Manifest and artifact document I/O.
//!
//! Convoy's documents travel as YAML or JSON; the format is chosen by
//! file extension (`.json` is JSON, anything else is read as YAML).
//! Parsing failures surface as [`Error::MalformedInput`] naming the
//! offending document; nothing partial is ever produced.

use crate::domain::{LocalConfig, Manifest, MasterPlan};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Document encoding, derived from a path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and deserialize a document of any supported format.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    let parsed = match Format::from_path(path) {
        Format::Json => serde_json::from_str(&data).map_err(|e| Error::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        Format::Yaml => serde_yaml::from_str(&data).map_err(|e| Error::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(parsed)
}

/// Serialize and write a document in the format its path implies.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = match Format::from_path(path) {
        Format::Json => {
            let mut s = serde_json::to_string_pretty(value).map_err(|e| Error::MalformedInput {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            s.push('\n');
            s
        }
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| Error::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };
    fs::write(path, data)?;
    tracing::debug!(path = %path.display(), "wrote document");
    Ok(())
}

/// Load a dependency manifest.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    load_document(path)
}

/// Load a master deployment-order artifact.
pub fn load_master_plan(path: &Path) -> Result<MasterPlan> {
    load_document(path)
}

/// Load a local override configuration.
pub fn load_local_config(path: &Path) -> Result<LocalConfig> {
    load_document(path)
}
