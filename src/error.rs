//! Error types raised while rendering operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The operation carries a payload that has no rendering path.
    #[error("{0}")]
    Unsupported(String),

    /// The operation kind exists in the model but has no renderer yet.
    #[error("rendering of {kind} operations is not yet supported")]
    NotYetSupported { kind: &'static str },

    /// No renderer is registered for the operation kind (strict dispatch only).
    #[error("no renderer is established for operation kind `{kind}`")]
    NoRenderer { kind: String },

    /// A structural invariant of the input was violated.
    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },
}

impl RenderError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            what,
            detail: detail.into(),
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
