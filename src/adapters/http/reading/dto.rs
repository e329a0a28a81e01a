//! HTTP DTOs for reading endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{StartSessionResult, SubmitAnswerResult, SummaryView};
use crate::domain::session::SessionError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Client-held context echoed back on every turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChooseContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Request carrying one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ChooseRequest {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub context: ChooseContext,
}

/// Query parameters for the summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly opened session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    /// Always empty; the opening text is carried in `guidance`.
    pub prompt: String,
    pub guidance: String,
}

impl From<StartSessionResult> for StartResponse {
    fn from(result: StartSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            prompt: String::new(),
            guidance: result.guidance,
        }
    }
}

/// Response for one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChooseResponse {
    pub text: String,
    pub done: bool,
    pub context: ChooseContext,
}

impl From<SubmitAnswerResult> for ChooseResponse {
    fn from(result: SubmitAnswerResult) -> Self {
        Self {
            text: result.reply.text,
            done: result.reply.done,
            context: ChooseContext {
                session_id: Some(result.session_id.to_string()),
            },
        }
    }
}

/// Summary of accepted words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub text: String,
    pub words: Vec<String>,
}

impl From<SummaryView> for SummaryResponse {
    fn from(view: SummaryView) -> Self {
        Self {
            text: view.text,
            words: view.words,
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&SessionError> for ErrorResponse {
    fn from(error: &SessionError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}
