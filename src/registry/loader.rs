//! Registry loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::registry::descriptor::{PlatformDescriptor, PlatformRegistry, RegistryError};

/// Error type for registry file loading.
#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid registry: {}", join_errors(.0))]
    Invalid(Vec<RegistryError>),
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    platforms: Vec<PlatformDescriptor>,
}

/// Parse a registry from TOML text (`[[platforms]]` tables, in page order).
pub fn parse_registry(content: &str) -> Result<PlatformRegistry, RegistryLoadError> {
    let file: RegistryFile = toml::from_str(content)?;
    PlatformRegistry::new(file.platforms).map_err(RegistryLoadError::Invalid)
}

/// Load and validate a registry from a TOML file.
pub fn load_registry(path: &Path) -> Result<PlatformRegistry, RegistryLoadError> {
    let content = fs::read_to_string(path)?;
    let registry = parse_registry(&content)?;

    tracing::debug!(path = %path.display(), platforms = registry.len(), "Registry file loaded");
    Ok(registry)
}

pub(crate) fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
