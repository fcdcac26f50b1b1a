//! Native transport backed by `reqwest` with an in-memory cookie jar.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use api::{ApiError, HttpRequest, HttpResponse, Method, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client whose cookie store keeps the backend session between
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { client })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = self.client.request(reqwest_method(request.method), &request.url);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(%status, url = %request.url, "response received");
        Ok(HttpResponse { status, body })
    }
}
