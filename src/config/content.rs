//! Content catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Content configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// YAML catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.catalog_path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}
