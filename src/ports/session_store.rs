//! Session Store Port - Keyed storage for reading sessions.
//!
//! Maps opaque session ids to [`Session`] values. The store only holds
//! state; per-session serialization of turns is the application layer's job.

use async_trait::async_trait;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::Session;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session already exists: {0}")]
    AlreadyExists(SessionId),

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for persisting and loading sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session.
    ///
    /// Returns `None` if the id is unknown or the session was evicted.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;

    /// Store a newly created session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::AlreadyExists` if the id is taken.
    async fn create(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Insert or replace a session.
    async fn put(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Drop every session whose last activity is before `cutoff`.
    ///
    /// # Returns
    /// The number of sessions removed.
    async fn evict_idle(&self, cutoff: Timestamp) -> Result<usize, SessionStoreError>;

    /// Number of sessions currently held.
    async fn len(&self) -> Result<usize, SessionStoreError>;
}
