//! Store doubles for handler tests.

use async_trait::async_trait;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::Session;
use crate::ports::{SessionStore, SessionStoreError};

/// A store whose backend is always down.
pub struct FailingStore;

fn down() -> SessionStoreError {
    SessionStoreError::Unavailable("simulated outage".to_string())
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn get(&self, _id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Err(down())
    }

    async fn create(&self, _session: &Session) -> Result<(), SessionStoreError> {
        Err(down())
    }

    async fn put(&self, _session: &Session) -> Result<(), SessionStoreError> {
        Err(down())
    }

    async fn evict_idle(&self, _cutoff: Timestamp) -> Result<usize, SessionStoreError> {
        Err(down())
    }

    async fn len(&self) -> Result<usize, SessionStoreError> {
        Err(down())
    }
}
