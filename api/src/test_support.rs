//! Scripted transport and fixtures shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

pub const TEST_BASE: &str = "http://backend.test";

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<HttpResponse, ApiError>) -> &Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn ok(&self, data: Value) -> &Self {
        self.push(Ok(envelope(200, true, None, Some(data))))
    }

    pub fn ok_empty(&self) -> &Self {
        self.push(Ok(envelope(200, true, None, None)))
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request recorded")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

pub fn envelope(status: u16, success: bool, message: Option<&str>, data: Option<Value>) -> HttpResponse {
    let mut body = json!({ "success": success });
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    if let Some(data) = data {
        body["data"] = data;
    }
    HttpResponse { status, body: body.to_string() }
}

pub fn client(transport: &MockTransport) -> ApiClient<&MockTransport> {
    ApiClient::new(ApiConfig::new(TEST_BASE), transport)
}

pub fn vehicle_json(id: &str) -> Value {
    json!({
        "vehicleId": id,
        "licensePlate": "51K-888.88",
        "brand": "VinFast",
        "model": "VF 8",
        "year": 2024,
        "batteryCapacityKwh": 87.7,
        "status": "Available",
        "imageUrl": format!("/uploads/vehicles/{id}.jpg"),
        "groupId": null
    })
}

pub fn login_user_json() -> Value {
    json!({
        "userId": "u-42",
        "email": "lan@example.com",
        "fullName": "Trần Thị Lan",
        "role": "CoOwner",
        "verificationStatus": "Verified"
    })
}
