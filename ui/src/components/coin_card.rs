use api::coin::CoinRecord;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

#[derive(Props, PartialEq, Clone)]
pub struct CoinCardProps {
    pub coin: CoinRecord,
    /// True while an insight for this coin is being fetched.
    #[props(default = false)]
    pub busy: bool,
    pub on_insight: EventHandler<String>,
}

/// One coin's price, 24h change and an insight action.
#[component]
pub fn CoinCard(props: CoinCardProps) -> Element {
    let coin = props.coin;
    let change_color = if coin.is_gain() {
        "var(--pico-ins-color)"
    } else {
        "var(--pico-del-color)"
    };
    let coin_name = coin.name.clone();

    rsx! {
        article {
            class: "coin-card",
            header {
                style: "display: flex; align-items: center; gap: 0.75rem;",
                span {
                    class: "coin-icon",
                    "{coin.icon}"
                }
                div {
                    strong { "{coin.name}" }
                    br {}
                    small {
                        style: "color: var(--pico-muted-color);",
                        "{coin.symbol}"
                    }
                }
            }
            p {
                style: "font-size: 1.5rem; margin-bottom: 0.25rem;",
                "{coin.formatted_price()}"
            }
            p {
                style: "color: {change_color}; margin-bottom: 1rem;",
                "{coin.formatted_change()} (24h)"
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    busy: props.busy,
                    on_click: move |_| props.on_insight.call(coin_name.clone()),
                    "✨ Get Insight"
                }
            }
        }
    }
}
