//! HTTP handlers for reading endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::application::{
    GetSummaryHandler, GetSummaryQuery, StartSessionHandler, SubmitAnswerCommand,
    SubmitAnswerHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

use super::dto::{
    ChooseRequest, ChooseResponse, ErrorResponse, HealthResponse, StartResponse, SummaryQuery,
    SummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReadingHandlers {
    start_handler: Arc<StartSessionHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    summary_handler: Arc<GetSummaryHandler>,
    store: Arc<dyn SessionStore>,
    cookie_name: Arc<str>,
}

impl ReadingHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        summary_handler: Arc<GetSummaryHandler>,
        store: Arc<dyn SessionStore>,
        cookie_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            summary_handler,
            store,
            cookie_name: cookie_name.into(),
        }
    }

    fn session_cookie(&self, id: SessionId) -> Cookie<'static> {
        Cookie::build((self.cookie_name.to_string(), id.to_string()))
            .path("/")
            .http_only(false)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Explicit id first, then the cookie. Malformed ids count as absent.
    fn resolve_session_id(&self, explicit: Option<&str>, jar: &CookieJar) -> Option<SessionId> {
        explicit
            .filter(|raw| !raw.trim().is_empty())
            .map(str::to_string)
            .or_else(|| jar.get(&self.cookie_name).map(|c| c.value().to_string()))
            .and_then(|raw| raw.parse().ok())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /start - Open a new reading
pub async fn start(State(handlers): State<ReadingHandlers>, jar: CookieJar) -> Response {
    match handlers.start_handler.handle().await {
        Ok(result) => {
            let jar = jar.add(handlers.session_cookie(result.session_id));
            let response: StartResponse = result.into();
            (StatusCode::OK, jar, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /choose - Submit one answer
pub async fn choose(
    State(handlers): State<ReadingHandlers>,
    jar: CookieJar,
    Json(req): Json<ChooseRequest>,
) -> Response {
    let cmd = SubmitAnswerCommand {
        session_id: handlers.resolve_session_id(req.context.session_id.as_deref(), &jar),
        answer: req.answer,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let jar = if result.started_fresh {
                jar.add(handlers.session_cookie(result.session_id))
            } else {
                jar
            };
            let response: ChooseResponse = result.into();
            (StatusCode::OK, jar, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /summary - Accepted words so far
pub async fn summary(
    State(handlers): State<ReadingHandlers>,
    jar: CookieJar,
    Query(params): Query<SummaryQuery>,
) -> Response {
    let query = GetSummaryQuery {
        session_id: handlers.resolve_session_id(params.session_id.as_deref(), &jar),
    };

    match handlers.summary_handler.handle(query).await {
        Ok(view) => {
            let response: SummaryResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /health - Liveness and live session count
pub async fn health(State(handlers): State<ReadingHandlers>) -> Response {
    match handlers.store.len().await {
        Ok(sessions) => {
            let response = HealthResponse {
                status: "ok".to_string(),
                sessions,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e.into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    let status = match error {
        SessionError::Conflict(_) => StatusCode::CONFLICT,
        SessionError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    tracing::error!(code = %error.code(), error = %error, "Request failed");
    (status, Json(ErrorResponse::from(&error))).into_response()
}
