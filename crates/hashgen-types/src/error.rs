use thiserror::Error;

/// Message used when the service rejects a request without an `error` field.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to generate hash";

/// Message shown to the user when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// Errors from a single hash request (remote or transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (connect refused, reset, DNS).
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RequestError {
    /// Build a rejection from the service's `error` field, if any.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        RequestError::Rejected {
            status,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
        }
    }

    /// The single string surfaced in the form's error slot.
    ///
    /// Only rejections carry a message meant for users; transport and decode
    /// failures collapse to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Rejected { message, .. } => message.clone(),
            RequestError::Transport(_) | RequestError::Malformed(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Errors from the hash service.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("input is required")]
    InputRequired,

    #[error("input must be alphanumeric")]
    NotAlphanumeric,

    #[error("hash generation failed: {0}")]
    Generation(String),
}
