//! Browser transport and the shared API handle.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with credentials
//! included so the backend's session cookie rides along on every request.
//! Native builds (unit tests): the transport reports itself unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures come back as `ApiError::Transport`; nothing here
//! panics, so a dead backend degrades pages to an inline message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use api::{ApiClient, ApiConfig, ApiError, HttpRequest, HttpResponse, Method, Transport};
use leptos::prelude::*;

/// API client bound to the browser transport.
pub type WebClient = ApiClient<BrowserTransport>;

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

fn transport_failed_message(method: Method, url: &str, detail: &str) -> String {
    format!("{} {url} failed: {detail}", method.as_str())
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let fail = |e: gloo_net::Error| {
                ApiError::Transport(transport_failed_message(request.method, &request.url, &e.to_string()))
            };
            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .credentials(RequestCredentials::Include);
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(fail)?;

            let resp = outgoing.send().await.map_err(fail)?;
            let status = resp.status();
            let body = resp.text().await.map_err(fail)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport(transport_failed_message(
                request.method,
                &request.url,
                "no browser transport",
            )))
        }
    }
}

/// Copyable handle to the app-wide [`WebClient`], provided via context.
#[derive(Clone, Copy)]
pub struct ApiHandle(StoredValue<WebClient>);

impl ApiHandle {
    pub fn new(config: ApiConfig) -> Self {
        Self(StoredValue::new(ApiClient::new(config, BrowserTransport)))
    }

    /// Owned client for moving into a spawned task.
    pub fn client(self) -> WebClient {
        self.0.get_value()
    }

    /// Absolute URL for a backend-relative image path.
    pub fn image_url(self, path: Option<&str>) -> String {
        self.0.with_value(|c| c.config().image_url(path))
    }
}

/// The [`ApiHandle`] provided by [`crate::app::App`].
pub fn use_api() -> ApiHandle {
    expect_context::<ApiHandle>()
}
