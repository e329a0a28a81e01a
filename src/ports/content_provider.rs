//! Content Provider Port - Source of word clusters and phrase variations.
//!
//! The session state machine never owns text; it asks this port for the
//! cluster behind an id and for a phrasing from a named pool.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::domain::content::{Cluster, ClusterId, VariantPool};

/// Port for reading the word catalog.
///
/// Implementations are immutable after construction and shared across all
/// sessions, so every method takes `&self`.
pub trait ContentProvider: Send + Sync {
    /// Number of clusters in the catalog. Ids are `0..cluster_count()`.
    fn cluster_count(&self) -> usize;

    /// Look up a cluster by id.
    fn cluster(&self, id: ClusterId) -> Option<&Cluster>;

    /// All phrasings in a pool.
    fn variants(&self, pool: VariantPool) -> &[String];

    /// Draw one phrasing uniformly at random.
    ///
    /// Returns `None` only when the pool is empty.
    fn draw_variant(&self, pool: VariantPool, rng: &mut dyn RngCore) -> Option<&str> {
        self.variants(pool).choose(rng).map(String::as_str)
    }
}
