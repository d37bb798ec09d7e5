//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the app bar (render gating), the session watcher (logout) and
//! the sign-in page (provider-specific button).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// SSO provider configured on the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthProvider {
    Google,
    Okta,
    Auth0,
    Azure,
    CustomOidc,
    AwsCognito,
    /// Anything this client has no sign-in flow for; keeps the raw name.
    Unknown(String),
}

impl AuthProvider {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Google => "google",
            Self::Okta => "okta",
            Self::Auth0 => "auth0",
            Self::Azure => "azure",
            Self::CustomOidc => "custom-oidc",
            Self::AwsCognito => "aws-cognito",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for AuthProvider {
    fn from(raw: &str) -> Self {
        match raw {
            "google" => Self::Google,
            "okta" => Self::Okta,
            "auth0" => Self::Auth0,
            "azure" => Self::Azure,
            "custom-oidc" => Self::CustomOidc,
            "aws-cognito" => Self::AwsCognito,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for AuthProvider {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<AuthProvider> for String {
    fn from(provider: AuthProvider) -> Self {
        provider.as_str().to_owned()
    }
}

/// Auth configuration as served by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub provider: AuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

/// Authentication state of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub auth_config: Option<AuthConfig>,
}

impl AuthState {
    /// Pick up whatever credential the browser already holds.
    ///
    /// Call after hydration: the server render always starts signed out.
    pub fn sync_from_storage(&mut self) {
        self.is_authenticated = stored_id_token().is_some();
    }

    /// Drop the stored credential and mark the user signed out.
    pub fn logout(&mut self) {
        storage::remove(storage::OIDC_TOKEN_KEY);
        self.is_authenticated = false;
        tracing::info!("signed out");
    }
}

/// ID token kept by the identity provider flow, if any.
pub fn stored_id_token() -> Option<String> {
    storage::read(storage::OIDC_TOKEN_KEY).filter(|t| !t.is_empty())
}
