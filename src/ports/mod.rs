//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentProvider` - Word clusters and phrase variation pools
//! - `SessionStore` - Keyed storage for reading sessions

mod content_provider;
mod session_store;

pub use content_provider::ContentProvider;
pub use session_store::{SessionStore, SessionStoreError};
