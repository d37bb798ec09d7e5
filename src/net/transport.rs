//! Concrete transports.
//!
//! Native (CLI, SSR host, tests): `HttpTransport` over `reqwest`.
//! Browser (hydrate): `BrowserTransport` over `gloo-net`, attaching the
//! stored bearer token the way the catalog backend expects.

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpTransport;

#[cfg(feature = "hydrate")]
pub use browser::BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use crate::config::ApiTimeouts;
    use crate::net::api::{ApiRequest, ApiResponse, Method, Transport};
    use crate::net::error::ApiError;

    /// `reqwest`-backed transport with optional bearer authentication.
    pub struct HttpTransport {
        http: reqwest::Client,
        token: Option<String>,
    }

    impl HttpTransport {
        /// # Errors
        ///
        /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be constructed.
        pub fn new(timeouts: ApiTimeouts, token: Option<String>) -> Result<Self, ApiError> {
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeouts.request_secs))
                .connect_timeout(Duration::from_secs(timeouts.connect_secs))
                .build()
                .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
            Ok(Self { http, token })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for HttpTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let mut builder = match request.method {
                Method::Get => self.http.get(&request.url),
                Method::Post => self.http.post(&request.url),
                Method::Put => self.http.put(&request.url),
                Method::Patch => self.http.patch(&request.url),
            };
            if let Some(token) = &self.token {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = request.body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, request.content_type)
                    .body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder};

    use crate::net::api::{ApiRequest, ApiResponse, Method, Transport};
    use crate::net::error::ApiError;
    use crate::util::storage;

    /// `fetch`-backed transport for the hydrated app.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTransport;

    #[async_trait::async_trait(?Send)]
    impl Transport for BrowserTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let mut builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
            };
            if let Some(token) = storage::read(storage::OIDC_TOKEN_KEY) {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }

            let prepared = match request.body {
                Some(body) => builder.header("Content-Type", request.content_type).body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
    }
}
