//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It owns per-session turn serialization and the source of randomness.

pub mod handlers;

pub use handlers::{
    EvictIdleSessionsHandler, GetSummaryHandler, GetSummaryQuery, SessionLocks,
    StartSessionHandler, StartSessionResult, SubmitAnswerCommand, SubmitAnswerHandler,
    SubmitAnswerResult, SummaryView,
};
