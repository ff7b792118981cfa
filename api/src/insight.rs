//! The insight workflow: prompt construction, the `generateContent` wire
//! format, and the mapping from a remote reply to a user-facing outcome.

use crate::insight_providers::TextGenerator;
use serde::Deserialize;
use serde::Serialize;

/// Shown when the endpoint answers but offers no completion.
pub const NO_INSIGHT_MESSAGE: &str = "Could not retrieve insight. Please try again.";

/// Shown when the request fails outright.
pub const INSIGHT_FAILED_MESSAGE: &str = "Failed to fetch insight due to an error.";

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("coin name must not be empty")]
    EmptyCoinName,

    #[error("request to text-generation endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("text-generation endpoint answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response from text-generation endpoint: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for InsightError {
    /// Drops the request URL so nothing in it ends up in logs.
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

/// The settled result of one insight request, ready to be rendered.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum InsightOutcome {
    /// Generated text, or the soft-failure placeholder when no completion came back.
    Ready(String),
    /// The request failed; carries the fixed failure message.
    Failed(String),
}

impl From<Result<Option<String>, InsightError>> for InsightOutcome {
    fn from(result: Result<Option<String>, InsightError>) -> Self {
        match result {
            Ok(Some(text)) => Self::Ready(text),
            Ok(None) => Self::Ready(NO_INSIGHT_MESSAGE.to_string()),
            Err(_) => Self::Failed(INSIGHT_FAILED_MESSAGE.to_string()),
        }
    }
}

impl InsightOutcome {
    /// Folds the result of calling the insight server function into an
    /// outcome. A failed call, e.g. an unreachable server, becomes the fixed
    /// failure message.
    pub fn from_call<E: std::fmt::Display>(result: Result<InsightOutcome, E>) -> Self {
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                dioxus_logger::tracing::warn!("coin_insight call failed: {}", e);
                Self::Failed(INSIGHT_FAILED_MESSAGE.to_string())
            }
        }
    }
}

//=============================================================================
// Wire format
//=============================================================================

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Body of a `generateContent` request.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn holding `prompt`.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Body of a `generateContent` response.
///
/// Every level is optional on the wire; a reply missing `candidates`,
/// `content` or `parts` still parses and simply has no text.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

//=============================================================================
// Fetcher
//=============================================================================

/// Builds the natural-language prompt sent for `coin_name`.
pub fn build_prompt(coin_name: &str) -> String {
    format!(
        "Provide a brief, one-paragraph insight about the cryptocurrency {coin_name}. \
         Describe what it is, what it is commonly used for, and one notable fact about it. \
         Keep it concise and suitable for a dashboard."
    )
}

/// Turns a coin name into an `InsightOutcome` with exactly one call to a
/// `TextGenerator`.
pub struct InsightFetcher<G> {
    generator: G,
}

impl<G: TextGenerator> InsightFetcher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Fetches the insight for `coin_name`.
    ///
    /// Never fails: errors are logged here and folded into
    /// `InsightOutcome::Failed`.
    pub async fn fetch(&self, coin_name: &str) -> InsightOutcome {
        let result = self.try_fetch(coin_name).await;
        if let Err(e) = &result {
            dioxus_logger::tracing::warn!("insight for '{}' failed: {}", coin_name, e);
        }
        result.into()
    }

    /// Like `fetch`, but hands back the raw error instead of the fixed message.
    pub async fn try_fetch(&self, coin_name: &str) -> Result<Option<String>, InsightError> {
        let coin_name = coin_name.trim();
        if coin_name.is_empty() {
            return Err(InsightError::EmptyCoinName);
        }

        let request = GenerateContentRequest::from_prompt(build_prompt(coin_name));
        let response = self.generator.generate(&request).await?;

        Ok(response.first_text().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    /// Replies with a fixed JSON document, or fails with a parse error when
    /// the body is not JSON at all.
    struct CannedReply {
        body: &'static str,
        calls: Cell<usize>,
        last_request: std::cell::RefCell<Option<GenerateContentRequest>>,
    }

    impl CannedReply {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Cell::new(0),
                last_request: Default::default(),
            }
        }
    }

    impl TextGenerator for CannedReply {
        async fn generate(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, InsightError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(request.clone());
            Ok(serde_json::from_str(self.body)?)
        }
    }

    #[test]
    fn request_body_has_expected_shape() {
        let request = GenerateContentRequest::from_prompt("hello");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn prompt_embeds_coin_name() {
        assert!(build_prompt("Solana").contains("Solana"));
    }

    #[test]
    fn first_text_tolerates_missing_levels() {
        for body in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {}}]}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.first_text(), None, "body: {body}");
        }
    }

    #[tokio::test]
    async fn well_formed_completion_is_ready_with_exact_text() {
        let fetcher = InsightFetcher::new(CannedReply::new(
            r#"{"candidates": [{"content": {"parts": [{"text": "Bitcoin is digital gold."}, {"text": "ignored"}]}}]}"#,
        ));

        let outcome = fetcher.fetch("Bitcoin").await;

        assert_eq!(outcome, InsightOutcome::Ready("Bitcoin is digital gold.".to_string()));
        assert_eq!(fetcher.generator.calls.get(), 1);

        let sent = fetcher.generator.last_request.borrow().clone().unwrap();
        let prompt = sent.contents[0].parts[0].text.clone().unwrap();
        assert!(prompt.contains("Bitcoin"));
    }

    #[tokio::test]
    async fn empty_candidates_is_soft_failure() {
        let fetcher = InsightFetcher::new(CannedReply::new(r#"{"candidates": []}"#));

        let outcome = fetcher.fetch("Ethereum").await;

        assert_eq!(outcome, InsightOutcome::Ready(NO_INSIGHT_MESSAGE.to_string()));
    }

    struct Rejecting;

    impl TextGenerator for Rejecting {
        async fn generate(
            &self,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, InsightError> {
            Err(InsightError::Status(503))
        }
    }

    #[tokio::test]
    async fn rejected_request_is_hard_failure() {
        let fetcher = InsightFetcher::new(Rejecting);

        let outcome = fetcher.fetch("Solana").await;

        assert_eq!(outcome, InsightOutcome::Failed(INSIGHT_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn failed_server_call_maps_to_fixed_message() {
        let outcome = InsightOutcome::from_call(Err::<InsightOutcome, _>("server unreachable"));
        assert_eq!(outcome, InsightOutcome::Failed(INSIGHT_FAILED_MESSAGE.to_string()));

        let ready = InsightOutcome::Ready("text".to_string());
        assert_eq!(InsightOutcome::from_call(Ok::<_, String>(ready.clone())), ready);
    }

    #[tokio::test]
    async fn unparseable_body_is_hard_failure() {
        let fetcher = InsightFetcher::new(CannedReply::new("<html>bad gateway</html>"));

        let outcome = fetcher.fetch("Solana").await;

        assert_eq!(outcome, InsightOutcome::Failed(INSIGHT_FAILED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn empty_coin_name_never_reaches_the_endpoint() {
        let fetcher = InsightFetcher::new(CannedReply::new(r#"{}"#));

        assert!(matches!(fetcher.try_fetch("  ").await, Err(InsightError::EmptyCoinName)));
        assert!(fetcher.fetch("").await.is_failed());
        assert_eq!(fetcher.generator.calls.get(), 0);
    }
}
