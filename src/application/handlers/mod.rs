//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    EvictIdleSessionsHandler, GetSummaryHandler, GetSummaryQuery, SessionLocks,
    StartSessionHandler, StartSessionResult, SubmitAnswerCommand, SubmitAnswerHandler,
    SubmitAnswerResult, SummaryView,
};
