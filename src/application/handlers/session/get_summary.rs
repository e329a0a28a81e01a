//! GetSummaryHandler - Query handler for the accepted words of a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::lines::SESSION_EXPIRED;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Query for a session's summary.
#[derive(Debug, Clone)]
pub struct GetSummaryQuery {
    pub session_id: Option<SessionId>,
}

/// Summary text plus the accepted titles in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub text: String,
    pub words: Vec<String>,
}

impl SummaryView {
    fn expired() -> Self {
        Self {
            text: SESSION_EXPIRED.to_string(),
            words: Vec::new(),
        }
    }
}

/// Handler for reading summaries. Never mutates a session.
pub struct GetSummaryHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSummaryHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSummaryQuery) -> Result<SummaryView, SessionError> {
        let Some(id) = query.session_id else {
            return Ok(SummaryView::expired());
        };

        match self.store.get(&id).await? {
            Some(session) => Ok(SummaryView {
                text: session.summary(),
                words: session.accepted().to_vec(),
            }),
            None => {
                tracing::debug!(session_id = %id, "Summary requested for unknown session");
                Ok(SummaryView::expired())
            }
        }
    }
}
