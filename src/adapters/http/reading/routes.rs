//! HTTP routes for reading endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{choose, health, start, summary, ReadingHandlers};

/// Creates the reading router with all endpoints.
pub fn reading_routes(handlers: ReadingHandlers) -> Router {
    Router::new()
        .route("/start", get(start))
        .route("/choose", post(choose))
        .route("/summary", get(summary))
        .route("/health", get(health))
        .with_state(handlers)
}
