//! StartSessionHandler - Command handler for opening a reading.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{lines, Session, SessionError};
use crate::ports::{ContentProvider, SessionStore};

/// Result of opening a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    /// Summons question plus the yes/no hint.
    pub guidance: String,
}

/// Handler for opening sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    content: Arc<dyn ContentProvider>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, content: Arc<dyn ContentProvider>) -> Self {
        Self { store, content }
    }

    pub async fn handle(&self) -> Result<StartSessionResult, SessionError> {
        let session = new_session(self.content.as_ref());
        self.store.create(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            clusters = session.remaining().len(),
            "Session started"
        );

        Ok(StartSessionResult {
            session_id: *session.id(),
            guidance: lines::opening_prompt(),
        })
    }
}

/// Fresh session in Intro with its own shuffled offer order.
pub(super) fn new_session(content: &dyn ContentProvider) -> Session {
    let mut rng = rand::thread_rng();
    Session::new(SessionId::new(), content.cluster_count(), &mut rng)
}
