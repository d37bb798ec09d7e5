//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns URL building and response decoding on top of a pluggable
//! `Transport`; `transport` holds the reqwest (native) and gloo-net
//! (browser) implementations; `kpi` and `version` are the resource
//! wrappers; `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod kpi;
pub mod system;
pub mod transport;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use error::ApiError;
