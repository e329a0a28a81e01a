//! HTTP adapters - REST API implementations.

pub mod reading;

// Re-export key types for convenience
pub use reading::reading_routes;
pub use reading::ReadingHandlers;
