//! Application branding served by the backend (custom logos).

use serde::{Deserialize, Serialize};

/// Bundled logo used when no custom logo is configured.
pub const DEFAULT_LOGO_PATH: &str = "/assets/logo.svg";
/// Bundled monogram used when no custom monogram is configured.
pub const DEFAULT_MONOGRAM_PATH: &str = "/assets/monogram.svg";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_logo_url_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_monogram_url_path: Option<String>,
}

impl ApplicationConfig {
    /// Full logo source: the custom URL when set and non-blank, else the bundled asset.
    pub fn logo_src(&self) -> &str {
        non_blank(self.custom_logo_url_path.as_deref()).unwrap_or(DEFAULT_LOGO_PATH)
    }

    /// Monogram source with the same fallback rule as [`Self::logo_src`].
    pub fn monogram_src(&self) -> &str {
        non_blank(self.custom_monogram_url_path.as_deref()).unwrap_or(DEFAULT_MONOGRAM_PATH)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_urls_win_over_bundled_assets() {
        let cfg = ApplicationConfig {
            custom_logo_url_path: Some("https://customlink.source".into()),
            custom_monogram_url_path: Some("https://customlink.source/m".into()),
        };
        assert_eq!(cfg.logo_src(), "https://customlink.source");
        assert_eq!(cfg.monogram_src(), "https://customlink.source/m");
    }

    #[test]
    fn blank_or_missing_urls_fall_back() {
        let cfg = ApplicationConfig { custom_logo_url_path: Some("  ".into()), custom_monogram_url_path: None };
        assert_eq!(cfg.logo_src(), DEFAULT_LOGO_PATH);
        assert_eq!(cfg.monogram_src(), DEFAULT_MONOGRAM_PATH);
    }
}
