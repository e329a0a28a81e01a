//! Session command and query handlers.

mod evict_idle_sessions;
mod get_summary;
mod session_locks;
mod start_session;
mod submit_answer;

#[cfg(test)]
pub(crate) mod testing;

pub use evict_idle_sessions::EvictIdleSessionsHandler;
pub use get_summary::{GetSummaryHandler, GetSummaryQuery, SummaryView};
pub use session_locks::SessionLocks;
pub use start_session::{StartSessionHandler, StartSessionResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
