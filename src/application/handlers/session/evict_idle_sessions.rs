//! EvictIdleSessionsHandler - Drops sessions nobody has touched for a while.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

use super::SessionLocks;

/// Handler for idle-session eviction.
pub struct EvictIdleSessionsHandler {
    store: Arc<dyn SessionStore>,
    locks: Arc<SessionLocks>,
    idle_ttl_secs: u64,
}

impl EvictIdleSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>, locks: Arc<SessionLocks>, idle_ttl_secs: u64) -> Self {
        Self {
            store,
            locks,
            idle_ttl_secs,
        }
    }

    /// Evict sessions idle for longer than the TTL as of `now`.
    ///
    /// Returns the number of sessions removed.
    pub async fn handle(&self, now: Timestamp) -> Result<usize, SessionError> {
        let cutoff = now.minus_secs(self.idle_ttl_secs);
        let removed = self.store.evict_idle(cutoff).await?;
        let pruned = self.locks.prune();

        if removed > 0 {
            tracing::info!(removed, pruned_locks = pruned, "Evicted idle sessions");
        }
        Ok(removed)
    }
}
