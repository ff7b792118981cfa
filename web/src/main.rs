use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

/// Log level baked in at build time, e.g. `LOG_LEVEL=debug dx serve`.
/// Falls back to INFO when unset or unparseable.
fn log_level() -> Level {
    option_env!("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
}

#[component]
fn App() -> Element {
    ui::App()
}
