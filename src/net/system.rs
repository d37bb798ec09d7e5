//! System configuration lookups used at startup.

use serde::Deserialize;

use super::api::{ApiClient, Transport};
use super::error::ApiError;
use crate::state::auth::AuthConfig;
use crate::state::branding::ApplicationConfig;

/// Settings envelope: `{"config_type": ..., "config_value": {...}}`.
#[derive(Debug, Deserialize)]
struct Settings<T> {
    config_value: T,
}

impl<T: Transport> ApiClient<T> {
    /// `GET /system/config/auth`: the configured SSO provider.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn get_auth_config(&self) -> Result<AuthConfig, ApiError> {
        self.get("/system/config/auth", None).await
    }

    /// `GET /system/settings/customLogoConfiguration`: custom logo and monogram.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn get_application_config(&self) -> Result<ApplicationConfig, ApiError> {
        let settings: Settings<ApplicationConfig> = self.get("/system/settings/customLogoConfiguration", None).await?;
        Ok(settings.config_value)
    }
}

#[cfg(test)]
mod tests {
    use crate::net::ApiError;
    use crate::net::api::Method;
    use crate::net::test_support::{MockTransport, client};
    use crate::state::auth::AuthProvider;

    #[tokio::test]
    async fn get_auth_config_reads_provider() {
        let api = client(MockTransport::ok(&serde_json::json!({ "provider": "okta", "clientId": "x" })));
        let config = api.get_auth_config().await.unwrap();
        assert_eq!(config.provider, AuthProvider::Okta);
        assert_eq!(config.provider_name, None);

        let request = api.transport().only_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://catalog.test/api/v1/system/config/auth");
    }

    #[tokio::test]
    async fn get_application_config_unwraps_settings() {
        let api = client(MockTransport::ok(&serde_json::json!({
            "config_type": "customLogoConfiguration",
            "config_value": {
                "customLogoUrlPath": "https://cdn.example.test/logo.svg",
                "customMonogramUrlPath": "https://cdn.example.test/mono.svg"
            }
        })));
        let config = api.get_application_config().await.unwrap();
        assert_eq!(config.logo_src(), "https://cdn.example.test/logo.svg");
        assert_eq!(config.monogram_src(), "https://cdn.example.test/mono.svg");

        let request = api.transport().only_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://catalog.test/api/v1/system/settings/customLogoConfiguration");
    }

    #[tokio::test]
    async fn get_application_config_without_custom_paths_falls_back() {
        let api = client(MockTransport::ok(&serde_json::json!({ "config_value": {} })));
        let config = api.get_application_config().await.unwrap();
        assert_eq!(config.logo_src(), crate::state::branding::DEFAULT_LOGO_PATH);
    }

    #[tokio::test]
    async fn get_application_config_propagates_status() {
        let api = client(MockTransport::status(404, r#"{"message":"not configured"}"#));
        let err = api.get_application_config().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }
}
