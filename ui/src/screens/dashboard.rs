//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::coin_card::CoinCard;
use crate::components::empty_state::EmptyState;
use crate::components::insight_modal::InsightModal;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::SearchInput;
use crate::hooks::use_dashboard::use_coin_loader;
use crate::hooks::use_dashboard::use_dashboard;
use crate::view_state::InsightStatus;
use crate::view_state::LoadPhase;

#[component]
pub fn DashboardScreen() -> Element {
    use_coin_loader();
    let mut dashboard = use_dashboard();
    let view = dashboard.view();
    let state = view.read();

    // Only the coin whose insight is in flight shows a spinner.
    let pending_coin = match state.insight() {
        InsightStatus::Pending => state.insight_coin().map(str::to_string),
        _ => None,
    };

    rsx! {
        Card {
            header {
                h2 { style: "margin-bottom: 0.25rem;", "Crypto Dashboard" }
                small {
                    style: "color: var(--pico-muted-color);",
                    "Prices are simulated. Ask for an insight to learn more about a coin."
                }
            }

            SearchInput {
                value: state.search_term().to_string(),
                placeholder: "Search by name or symbol...".to_string(),
                on_input: move |term: String| dashboard.set_search_term(term),
            }

            match state.load_phase() {
                LoadPhase::Loading => rsx! {
                    div {
                        style: "text-align: center;",
                        p { "Loading prices..." }
                        progress {}
                    }
                },
                LoadPhase::Failed(message) => rsx! {
                    p {
                        role: "alert",
                        style: "color: var(--pico-del-color); font-weight: bold;",
                        "{message}"
                    }
                },
                LoadPhase::Loaded => {
                    let filtered = state.filtered_coins();
                    if filtered.is_empty() {
                        rsx! {
                            EmptyState {
                                title: "No coins found".to_string(),
                                description: Some(format!("Nothing matches \"{}\".", state.search_term())),
                                icon: Some("🔍".to_string()),
                            }
                        }
                    } else {
                        rsx! {
                            Grid {
                                for coin in filtered {
                                    CoinCard {
                                        key: "{coin.id}",
                                        coin: coin.clone(),
                                        busy: pending_coin.as_deref() == Some(coin.name.as_str()),
                                        on_insight: move |name: String| dashboard.request_insight(name),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        InsightModal {}
    }
}
