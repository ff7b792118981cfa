//! Server-side configuration for the remote text-generation endpoint.

use std::env;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Where and how to reach the text-generation endpoint.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InsightConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl InsightConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Creates an InsightConfig from environment variables, falling back to
    /// in-code defaults for anything unset or blank.
    ///
    /// # Environment Variables
    /// - `GEMINI_API_KEY`: sent in the `x-goog-api-key` header. Defaults to empty;
    ///   provisioning the key is left to the deployment.
    /// - `GEMINI_MODEL`: model name, e.g. "gemini-2.0-flash".
    /// - `GEMINI_BASE_URL`: API root without a trailing slash.
    pub fn from_env() -> Self {
        let var_or = |name: &str, default: &str| {
            env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_key: var_or("GEMINI_API_KEY", ""),
            model: var_or("GEMINI_MODEL", DEFAULT_MODEL),
            base_url: var_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
        }
    }

    /// The full `generateContent` URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
