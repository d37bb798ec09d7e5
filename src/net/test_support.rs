//! Recording transport used by client tests.

use std::cell::RefCell;

use super::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use super::error::ApiError;

pub(crate) const TEST_BASE_URL: &str = "http://catalog.test/api/v1";

/// Replies with a canned response and records every request it sees.
pub(crate) struct MockTransport {
    reply: Result<ApiResponse, String>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn ok(body: &serde_json::Value) -> Self {
        Self::status(200, &body.to_string())
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self { reply: Ok(ApiResponse { status, body: body.to_owned() }), requests: RefCell::new(Vec::new()) }
    }

    pub(crate) fn offline(reason: &str) -> Self {
        Self { reply: Err(reason.to_owned()), requests: RefCell::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// The single request issued so far. Panics unless exactly one was sent.
    pub(crate) fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests[0].clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.reply.clone().map_err(ApiError::Request)
    }
}

pub(crate) fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::with_base_url(transport, TEST_BASE_URL)
}
