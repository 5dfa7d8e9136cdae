//! Application configuration.
//!
//! The backend base URL is resolved once at startup and handed to the
//! component tree through the Leptos context. Resolution order:
//!
//! 1. `<meta name="backend-url" content="...">` in the served page
//! 2. `LEGAL_AI_BACKEND_URL` at compile time
//! 3. [`DEFAULT_BACKEND_URL`]

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend URL baked in at build time, if any.
pub const BUILD_BACKEND_URL: Option<&str> = option_env!("LEGAL_AI_BACKEND_URL");

/// Name of the `<meta>` tag that overrides the backend URL at runtime.
pub const BACKEND_URL_META: &str = "backend-url";

/// Path of the analysis endpoint, relative to the backend URL.
pub const UPLOAD_PATH: &str = "/upload";

/// Application name shown in the page title.
pub const APP_NAME: &str = "Legal Document AI Analysis";

/// Runtime configuration shared through the Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    backend_url: String,
}

impl AppConfig {
    /// Build a config for an explicit backend URL.
    ///
    /// Blank values fall back to [`DEFAULT_BACKEND_URL`].
    pub fn new(backend_url: &str) -> Self {
        Self::resolve(Some(backend_url), None)
    }

    /// Pick the first usable URL from the page override and the build-time value.
    pub fn resolve(page_override: Option<&str>, build_time: Option<&str>) -> Self {
        let backend_url = [page_override, build_time]
            .into_iter()
            .flatten()
            .map(normalize_url)
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self { backend_url }
    }

    /// Resolve the config from the current page and build environment.
    pub fn from_environment() -> Self {
        let page_override = read_meta_override();
        Self::resolve(page_override.as_deref(), BUILD_BACKEND_URL)
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Full URL of the analysis endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.backend_url, UPLOAD_PATH)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, BUILD_BACKEND_URL)
    }
}

fn normalize_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn read_meta_override() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", BACKEND_URL_META);
    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_override() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_override_wins() {
        let config = AppConfig::resolve(Some("https://api.example.org"), Some("http://build:9000"));
        assert_eq!(config.backend_url(), "https://api.example.org");
    }

    #[test]
    fn test_build_time_used_when_no_override() {
        let config = AppConfig::resolve(None, Some("http://build:9000"));
        assert_eq!(config.backend_url(), "http://build:9000");
    }

    #[test]
    fn test_blank_values_fall_through() {
        let config = AppConfig::resolve(Some("   "), Some(""));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_upload_url_trims_trailing_slashes() {
        let config = AppConfig::new("http://legal.internal:8000//");
        assert_eq!(config.upload_url(), "http://legal.internal:8000/upload");
    }

    #[test]
    fn test_default_points_at_upload_endpoint() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.upload_url(), "http://localhost:8000/upload");
    }
}
