//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `content` - YAML word catalog (ContentProvider)
//! - `storage` - In-memory session store (SessionStore)
//! - `http` - axum routes for the reading endpoints

pub mod content;
pub mod http;
pub mod storage;

pub use content::{Catalog, CatalogError};
pub use http::{reading_routes, ReadingHandlers};
pub use storage::InMemorySessionStore;
