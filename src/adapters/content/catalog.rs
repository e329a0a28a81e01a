//! YAML Catalog Adapter
//!
//! Loads word clusters and phrase pools from a YAML document. The default
//! catalog is compiled into the binary; a file on disk can replace it.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::content::{Cluster, ClusterId, VariantPool};
use crate::domain::foundation::ValidationError;
use crate::ports::ContentProvider;

const BUILTIN_CATALOG: &str = include_str!("../../../content/catalog.yaml");

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    pools: HashMap<VariantPool, Vec<String>>,
    clusters: Vec<Cluster>,
}

/// Immutable word catalog shared by every session
#[derive(Debug, Clone)]
pub struct Catalog {
    clusters: Vec<Cluster>,
    pools: HashMap<VariantPool, Vec<String>>,
}

impl Catalog {
    /// The catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let catalog = Self {
            clusters: document.clusters,
            pools: document.pools,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Every cluster in catalog order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.clusters.is_empty() {
            return Err(ValidationError::empty_field("clusters"));
        }
        if let Some(index) = self
            .clusters
            .iter()
            .position(|cluster| cluster.title.trim().is_empty())
        {
            return Err(ValidationError::empty_field(format!("clusters[{index}].title")));
        }
        for pool in VariantPool::ALL {
            let usable = self
                .pools
                .get(&pool)
                .is_some_and(|phrases| phrases.iter().any(|p| !p.trim().is_empty()));
            if !usable {
                return Err(ValidationError::empty_field(format!("pools.{}", pool.key())));
            }
        }
        Ok(())
    }
}

impl ContentProvider for Catalog {
    fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.index())
    }

    fn variants(&self, pool: VariantPool) -> &[String] {
        self.pools.get(&pool).map(Vec::as_slice).unwrap_or(&[])
    }
}
