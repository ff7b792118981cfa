//! Defines the reactive state shared by every dashboard component.

use crate::view_state::ViewState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context.
///
/// Wraps the session's single `ViewState` in a `Signal` so that every write
/// re-renders the components reading it. Components should go through
/// `hooks::use_dashboard` rather than writing the signal directly.
#[derive(Clone, Copy)]
pub struct AppState {
    pub view: Signal<ViewState>,
}
