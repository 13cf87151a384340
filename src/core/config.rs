//! Backend connection settings.
//!
//! The browser bundle reads `EXAM_API_URL` at compile time. The server reads it
//! at runtime with `ApiConfig::from_env()` after calling `dotenvy::dotenv()`.

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const API_URL_VAR: &str = "EXAM_API_URL";

/// Where the exam backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    /// Example: http://localhost:8000
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL, trimming trailing slashes.
    ///
    /// A blank URL falls back to [`DEFAULT_API_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Config baked into the build via `EXAM_API_URL`
    pub fn compiled() -> Self {
        Self::new(option_env!("EXAM_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Load from the process environment, falling back to the compiled value
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        std::env::var(API_URL_VAR)
            .map(Self::new)
            .unwrap_or_else(|_| Self::compiled())
    }

    /// Absolute URL for an API path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::compiled()
    }
}
