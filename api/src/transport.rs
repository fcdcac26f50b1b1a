//! HTTP transport seam.
//!
//! DESIGN
//! ======
//! The browser sends through `gloo-net` and the CLI through `reqwest`; tests
//! script responses. Futures are `?Send` because browser fetch futures are
//! tied to the JS event loop.

use serde_json::Value;

use crate::error::ApiError;

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL (base origin already applied).
    pub url: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Raw response as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must send session cookies with every request; the backend
/// session is opaque to this crate.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no HTTP response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request).await
    }
}
