//! Shared components for the dashboard: the pico.css wrappers plus the
//! coin card, insight panel and empty-state placeholder built on them.
pub mod coin_card;
pub mod empty_state;
pub mod insight_modal;
pub mod pico;
