use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::hooks::use_dashboard::use_dashboard;
use crate::view_state::InsightStatus;

/// The insight panel. Renders whatever the view state says and reports
/// dismissal back to it.
#[component]
pub fn InsightModal() -> Element {
    let mut dashboard = use_dashboard();
    let view = dashboard.view();

    let state = view.read();
    let title = match state.insight_coin() {
        Some(coin) => format!("✨ Insight: {coin}"),
        None => "✨ Insight".to_string(),
    };

    rsx! {
        Modal {
            is_open: state.insight_visible(),
            title: title,
            on_close: move |_| dashboard.dismiss_insight(),

            match state.insight() {
                InsightStatus::Idle => rsx! {},
                InsightStatus::Pending => rsx! {
                    div {
                        style: "text-align: center;",
                        p { "Generating insight..." }
                        progress {}
                    }
                },
                InsightStatus::Ready(text) => rsx! {
                    p {
                        style: "white-space: pre-wrap;",
                        "{text}"
                    }
                },
                InsightStatus::Failed(message) => rsx! {
                    p {
                        style: "color: var(--pico-del-color);",
                        "{message}"
                    }
                },
            }

            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| dashboard.dismiss_insight(),
                    "Close"
                }
            }
        }
    }
}
