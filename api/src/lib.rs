//! This crate contains the shared data model and all fullstack server functions.

pub mod coin;
pub mod coin_providers;
pub mod config;
pub mod insight;
pub mod insight_providers;

use dioxus::prelude::*;

use coin::CoinRecord;
use insight::InsightOutcome;

pub type ApiError = anyhow::Error;

/// Retrieves the coin list shown on the dashboard.
///
/// Prices are fixed; the response is delayed to mimic a real price feed.
#[post("/api/coins")]
pub async fn coins() -> Result<Vec<CoinRecord>, ApiError> {
    use coin_providers::CoinProvider;

    coin_providers::seeded::Seeded::default().get_coins().await
}

/// Asks the text-generation endpoint for a short insight about `coin_name`.
///
/// Runs on the server so the endpoint key never reaches the browser. Failures
/// are already folded into the returned outcome; an `Err` here only means the
/// server function itself could not be reached.
#[post("/api/coin_insight")]
pub async fn coin_insight(coin_name: String) -> Result<InsightOutcome, ApiError> {
    Ok(backend::insight_fetcher().fetch(&coin_name).await)
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use crate::insight::InsightFetcher;
    use crate::insight_providers::gemini::Gemini;
    use std::sync::OnceLock;

    /// One fetcher, and so one HTTP client, per server process.
    pub fn insight_fetcher() -> &'static InsightFetcher<Gemini> {
        static FETCHER: OnceLock<InsightFetcher<Gemini>> = OnceLock::new();
        FETCHER.get_or_init(|| InsightFetcher::new(Gemini::default()))
    }
}
