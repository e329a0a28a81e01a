//! Session-specific error types.
//!
//! The state machine itself never fails; these cover the collaborators
//! around it.

use crate::domain::foundation::{ErrorCode, SessionId};
use crate::ports::SessionStoreError;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A freshly issued id collided with a stored session.
    Conflict(SessionId),
    /// The session store could not be reached.
    Storage(String),
}

impl SessionError {
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Conflict(_) => ErrorCode::SessionConflict,
            SessionError::Storage(_) => ErrorCode::StorageUnavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::Conflict(id) => format!("Session id already in use: {}", id),
            SessionError::Storage(msg) => format!("Session storage unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<SessionStoreError> for SessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::AlreadyExists(id) => SessionError::Conflict(id),
            SessionStoreError::Unavailable(msg) => SessionError::Storage(msg),
        }
    }
}
