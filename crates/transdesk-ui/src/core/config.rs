//! Build-time configuration for the front-end.
//!
//! # Design
//! - The API base URL is fixed per build; `TRANSDESK_API_BASE_URL` overrides the deployed default.
//! - The picker key is optional; without it the upload trigger reports the picker as unavailable.

/// Deployed translation API.
pub const DEFAULT_API_BASE_URL: &str = "https://translation-oksx.onrender.com";

/// Resolved UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// API origin without a trailing slash.
    pub api_base_url: String,
    /// Hosted picker API key.
    pub picker_api_key: Option<String>,
}

impl UiConfig {
    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("TRANSDESK_API_BASE_URL"),
            option_env!("TRANSDESK_PICKER_API_KEY"),
        )
    }

    /// Resolve configuration from optional overrides. Blank values count as unset.
    #[must_use]
    pub fn resolve(base_url: Option<&str>, picker_api_key: Option<&str>) -> Self {
        let base = base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            picker_api_key: picker_api_key
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_deployed_endpoint() {
        let config = UiConfig::resolve(None, Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.picker_api_key, None);
    }

    #[test]
    fn override_is_normalised() {
        let config = UiConfig::resolve(Some(" http://localhost:5008/ "), Some("key"));
        assert_eq!(config.api_base_url, "http://localhost:5008");
        assert_eq!(config.url("/api/file/upload"), "http://localhost:5008/api/file/upload");
        assert_eq!(config.picker_api_key.as_deref(), Some("key"));
    }
}
