//! API and UI configuration parsed from environment variables.
//!
//! The browser build has no environment, so it relies on `Default`; the
//! CLI and SSR host call [`ApiConfig::from_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_DOCS_URL: &str = "https://docs.open-metadata.org/";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/open-metadata/OpenMetadata";
pub const DEFAULT_SLACK_URL: &str = "https://slack.open-metadata.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeouts: ApiTimeouts::default() }
    }
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `CATALOG_API_BASE_URL`: default `/api/v1`
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("CATALOG_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CATALOG_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self::new(&base_url, timeouts)
    }

    /// Build a config for an explicit base URL. Trailing slashes are trimmed.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), timeouts }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

/// External destinations listed in the navbar support menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLinks {
    pub docs_url: String,
    pub github_url: String,
    pub slack_url: String,
}

impl Default for UiLinks {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_owned(),
            github_url: DEFAULT_GITHUB_URL.to_owned(),
            slack_url: DEFAULT_SLACK_URL.to_owned(),
        }
    }
}
