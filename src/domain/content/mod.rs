//! Content module - the words a session can offer.
//!
//! Clusters and phrase pools are plain data; where they come from is decided
//! by the `ContentProvider` port.

mod cluster;
mod variant_pool;

pub use cluster::{Cluster, ClusterId, TITLE_SEPARATOR};
pub use variant_pool::VariantPool;
