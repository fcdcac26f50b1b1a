//! Error taxonomy for backend round trips.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable at the UI layer. Pages and actions turn them
//! into display text through [`crate::messages::describe`]; nothing here is
//! allowed to crash a page.

/// A failed request/response cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network down, CORS, DNS).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("http status {status}")]
    Status { status: u16, message: Option<String> },

    /// The backend answered 2xx but the envelope said `success: false`.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// The response body or its `data` payload did not match the expected shape.
    #[error("response schema mismatch: {0}")]
    Schema(String),

    /// Input was refused client-side before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    /// Server-provided message, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the backend considers the caller unauthenticated.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}
