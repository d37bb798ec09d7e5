//! REST client core: URL building, request dispatch and body decoding.
//!
//! DESIGN
//! ======
//! `ApiClient` is generic over a `Transport` so the same wrappers run
//! against `gloo-net` in the browser, `reqwest` natively, and a recording
//! mock in tests. Every wrapper issues exactly one request and returns the
//! decoded body; errors propagate unchanged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// HTTP verbs used by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

/// A fully-resolved request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute or origin-relative URL including the encoded query string.
    pub url: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
    pub content_type: &'static str,
}

/// Raw response as seen by the transport: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not interpret the status code; that is the
/// client's job. Futures are not `Send` because the browser transport
/// lives on the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Typed client over a [`Transport`], rooted at the API base URL.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self::with_base_url(transport, &config.base_url)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}{path}?{query}` and decode the JSON body.
    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str, query: Option<String>) -> Result<R, ApiError> {
        let request = ApiRequest {
            method: Method::Get,
            url: self.url(path, query.as_deref()),
            body: None,
            content_type: JSON_CONTENT_TYPE,
        };
        self.execute(request).await
    }

    /// Send a JSON body with `method` and decode the JSON response.
    pub(crate) async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        content_type: &'static str,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = ApiRequest { method, url: self.url(path, None), body: Some(body), content_type };
        self.execute(request).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method.as_str();
        tracing::debug!(method, url = %request.url, "api request");

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::debug!(method, status = response.status, "api request rejected");
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{path}?{q}", self.base_url),
            _ => format!("{}{path}", self.base_url),
        }
    }
}

/// Encode pass-through query parameters. Empty encodings yield `None`.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] when `params` is not a flat key/value shape.
pub fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<Option<String>, ApiError> {
    let encoded = serde_urlencoded::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok((!encoded.is_empty()).then_some(encoded))
}

/// Percent-encode a fully-qualified name for use as a single path segment.
pub fn encode_fqn(fqn: &str) -> String {
    urlencoding::encode(fqn).into_owned()
}
