//! HTTP adapter for the reading endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChooseContext, ChooseRequest, ChooseResponse, ErrorResponse, HealthResponse, StartResponse,
    SummaryQuery, SummaryResponse,
};
pub use handlers::ReadingHandlers;
pub use routes::reading_routes;
