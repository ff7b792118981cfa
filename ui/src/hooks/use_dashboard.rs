use api::insight::InsightOutcome;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::view_state::ViewState;

/// Handle for reading and driving the dashboard state from a component.
#[derive(Clone, Copy)]
pub struct Dashboard {
    view: Signal<ViewState>,
}

impl Dashboard {
    /// Returns the signal holding the view state.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn view(&self) -> Signal<ViewState> {
        self.view
    }

    pub fn set_search_term(&mut self, term: String) {
        self.view.write().set_search_term(term);
    }

    /// Shows the insight panel in its pending state right away, then asks
    /// the server for the insight and reports back into the view state.
    ///
    /// No concurrency guard: a second request supersedes the first, whose
    /// outcome is then dropped by `ViewState::resolve_insight`.
    pub fn request_insight(&mut self, coin_name: String) {
        let ticket = self.view.write().begin_insight(&coin_name);
        let mut view = self.view;

        spawn(async move {
            let outcome = InsightOutcome::from_call(api::coin_insight(coin_name).await);
            view.write().resolve_insight(ticket, outcome);
        });
    }

    pub fn dismiss_insight(&mut self) {
        self.view.write().dismiss_insight();
    }
}

pub fn use_dashboard() -> Dashboard {
    let app_state = use_context::<AppState>();
    Dashboard {
        view: app_state.view,
    }
}

/// Loads the coin list once for the lifetime of the calling component.
///
/// There is no retry: a failure is recorded in the view state and stays.
pub fn use_coin_loader() {
    let mut view = use_context::<AppState>().view;

    use_future(move || async move {
        let result = api::coins().await;
        if let Err(e) = view.write().finish_load(result) {
            dioxus_logger::tracing::debug!("ignoring second coin load: {}", e);
        }
    });
}
