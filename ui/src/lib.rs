// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod hooks;
mod screens;
pub mod view_state;

use app_state::AppState;
use components::pico::Container;
use screens::dashboard::DashboardScreen;
use view_state::ViewState;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        padding: 1rem 0;
    }

    /* --- COIN GRID --- */
    .coin-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        gap: 1rem;
    }

    .coin-card {
        margin: 0;
        display: flex;
        flex-direction: column;
    }

    .coin-card footer {
        margin-top: auto;
    }

    .coin-card footer button {
        width: 100%;
    }

    .coin-icon {
        font-size: 2rem;
        width: 2.5rem;
        text-align: center;
        color: var(--pico-primary);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{dashboard_css}"
        }
        AppBody {}
    }
}

/// Owns the session's single `ViewState` and provides it to every screen.
#[component]
fn AppBody() -> Element {
    let view = use_signal(ViewState::new);
    use_context_provider(|| AppState { view });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                DashboardScreen {}
            }
        }
    }
}
