//! Sources for the dashboard's coin list.

use crate::coin::CoinRecord;
use crate::ApiError;

/// A trait for any service that can provide the list of coins to display.
pub trait CoinProvider {
    /// Fetches the complete, ordered coin list.
    async fn get_coins(&self) -> Result<Vec<CoinRecord>, ApiError>;
}

/// Serves the fixed seed set after a simulated network round trip.
#[cfg(not(target_arch = "wasm32"))]
pub mod seeded {
    use super::*;
    use crate::coin::seed_coins;
    use std::time::Duration;

    /// Delay applied before the seed set is handed out.
    pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

    /// An implementation of the `CoinProvider` trait backed by `seed_coins()`.
    pub struct Seeded {
        latency: Duration,
    }

    impl Seeded {
        pub fn with_latency(latency: Duration) -> Self {
            Self { latency }
        }
    }

    impl Default for Seeded {
        fn default() -> Self {
            Self::with_latency(SIMULATED_LATENCY)
        }
    }

    impl CoinProvider for Seeded {
        async fn get_coins(&self) -> Result<Vec<CoinRecord>, ApiError> {
            tokio::time::sleep(self.latency).await;

            let coins = seed_coins();
            dioxus_logger::tracing::info!("serving {} seeded coins", coins.len());
            Ok(coins)
        }
    }
}
