//! SubmitAnswerHandler - Command handler for one turn of a reading.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Intent, OfferRules, Reply, Session, SessionError, TurnContext};
use crate::ports::{ContentProvider, SessionStore};

use super::start_session::new_session;
use super::SessionLocks;

/// Command carrying one raw answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    /// Session to advance. Missing or unknown ids start a fresh session.
    pub session_id: Option<SessionId>,
    pub answer: String,
}

/// Result of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAnswerResult {
    /// The session that handled the answer, which differs from the requested
    /// one when a fresh session was started.
    pub session_id: SessionId,
    pub reply: Reply,
    pub started_fresh: bool,
}

/// Handler for submitting answers.
pub struct SubmitAnswerHandler {
    store: Arc<dyn SessionStore>,
    content: Arc<dyn ContentProvider>,
    locks: Arc<SessionLocks>,
    rules: OfferRules,
}

impl SubmitAnswerHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        content: Arc<dyn ContentProvider>,
        locks: Arc<SessionLocks>,
        rules: OfferRules,
    ) -> Self {
        Self {
            store,
            content,
            locks,
            rules,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, SessionError> {
        let intent = Intent::normalize(&cmd.answer);

        if let Some(id) = cmd.session_id {
            let guard = self.locks.acquire(id).await;
            match self.store.get(&id).await {
                Ok(Some(mut session)) => {
                    let reply = self.advance(&mut session, &intent);
                    self.store.put(&session).await?;
                    return Ok(SubmitAnswerResult {
                        session_id: id,
                        reply,
                        started_fresh: false,
                    });
                }
                Ok(None) => {
                    drop(guard);
                    self.locks.forget(&id);
                }
                Err(e) => {
                    drop(guard);
                    self.locks.forget(&id);
                    return Err(e.into());
                }
            }
            tracing::info!(session_id = %id, "Unknown session, starting a fresh one");
        }

        let mut session = new_session(self.content.as_ref());
        let reply = self.advance(&mut session, &intent);
        self.store.create(&session).await?;
        tracing::info!(session_id = %session.id(), "Session started from answer");

        Ok(SubmitAnswerResult {
            session_id: *session.id(),
            reply,
            started_fresh: true,
        })
    }

    fn advance(&self, session: &mut Session, intent: &Intent) -> Reply {
        let from = session.phase();
        let mut rng = rand::thread_rng();
        let mut ctx = TurnContext::new(self.content.as_ref(), &mut rng, self.rules);
        let reply = session.respond(intent, &mut ctx);

        tracing::debug!(
            session_id = %session.id(),
            from = from.label(),
            to = session.phase().label(),
            done = reply.done,
            "Turn handled"
        );
        reply
    }
}
