//! Content Adapters
//!
//! Implementations of the ContentProvider port.
//!
//! - **Catalog** - YAML word catalog, built in or loaded from disk

mod catalog;

pub use catalog::{Catalog, CatalogError};
