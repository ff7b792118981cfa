//! Defines the seam to remote text-generation services and its implementations.

use crate::insight::GenerateContentRequest;
use crate::insight::GenerateContentResponse;
use crate::insight::InsightError;

/// A trait for any service that can answer a `generateContent` request.
pub trait TextGenerator {
    /// Sends one request and waits for exactly one response.
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, InsightError>;
}

/// Text generation through Google's Gemini REST API.
pub mod gemini {
    use super::*;
    use crate::config::InsightConfig;

    /// Header carrying the key, so it never appears in a request URL.
    const API_KEY_HEADER: &str = "x-goog-api-key";

    /// An implementation of the `TextGenerator` trait for Gemini.
    pub struct Gemini {
        client: reqwest::Client,
        config: InsightConfig,
    }

    impl Gemini {
        pub fn new(config: InsightConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }
    }

    impl Default for Gemini {
        fn default() -> Self {
            Self::new(InsightConfig::default())
        }
    }

    impl TextGenerator for Gemini {
        async fn generate(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, InsightError> {
            let resp = self
                .client
                .post(self.config.endpoint())
                .header(API_KEY_HEADER, self.config.api_key.as_str())
                .json(request)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(InsightError::Status(status.as_u16()));
            }

            // Parse separately from the transport so a bad body reports as malformed.
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        }
    }
}
