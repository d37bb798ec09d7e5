//! Server version lookup for the navbar support menu.

use super::api::{ApiClient, Transport};
use super::error::ApiError;
use super::types::VersionInfo;

impl<T: Transport> ApiClient<T> {
    /// `GET /version`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn get_version(&self) -> Result<VersionInfo, ApiError> {
        self.get("/version", None).await
    }
}

/// Release part of a version string: everything before the first `-`.
///
/// `"1.2.0-SNAPSHOT"` becomes `"1.2.0"`; an empty version becomes `"?"`.
pub fn release_version(version: &str) -> &str {
    if version.is_empty() {
        return "?";
    }
    version.split('-').next().unwrap_or(version)
}
