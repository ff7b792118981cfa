//! The dashboard's single state machine: coin list, search term, load phase
//! and the insight panel.

use api::coin::CoinRecord;
use api::insight::InsightOutcome;

/// Banner text shown when the coin list could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load cryptocurrency data.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    #[error("the coin list has already been loaded")]
    AlreadyLoaded,
}

/// Where the one-time coin load stands.
#[derive(Debug, Clone, PartialEq, Default, strum::EnumIs)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Status of the insight panel.
#[derive(Debug, Clone, PartialEq, Default, strum::EnumIs)]
pub enum InsightStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

impl From<InsightOutcome> for InsightStatus {
    fn from(outcome: InsightOutcome) -> Self {
        match outcome {
            InsightOutcome::Ready(text) => Self::Ready(text),
            InsightOutcome::Failed(message) => Self::Failed(message),
        }
    }
}

/// Identifies one insight request. Handed out by `begin_insight` and
/// required by `resolve_insight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTicket(u64);

/// All mutable UI data for one session.
///
/// Exactly one instance exists per session and it is only mutated from the
/// UI executor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    coins: Vec<CoinRecord>,
    search_term: String,
    load: LoadPhase,
    insight: InsightStatus,
    insight_visible: bool,
    /// Name of the coin the panel is about. Set together with `Pending`.
    insight_coin: Option<String>,
    /// Number of the most recent request; 0 before the first one.
    last_ticket: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    //-------------------------------------------------------------------------
    // coin list
    //-------------------------------------------------------------------------

    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn load_phase(&self) -> &LoadPhase {
        &self.load
    }

    /// Leaves the `Loading` phase, either with the loaded coins or with the
    /// fixed load-error message.
    ///
    /// Only the first call has any effect; later calls return
    /// `StateError::AlreadyLoaded` and leave the state untouched.
    pub fn finish_load<E: std::fmt::Display>(
        &mut self,
        result: Result<Vec<CoinRecord>, E>,
    ) -> Result<(), StateError> {
        if !self.load.is_loading() {
            return Err(StateError::AlreadyLoaded);
        }

        match result {
            Ok(coins) => {
                self.coins = coins;
                self.load = LoadPhase::Loaded;
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("loading coins failed: {}", e);
                self.coins.clear();
                self.load = LoadPhase::Failed(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        Ok(())
    }

    //-------------------------------------------------------------------------
    // search
    //-------------------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Coins whose name or symbol contains the search term, ignoring case,
    /// in their original order. Empty when nothing matches.
    pub fn filtered_coins(&self) -> Vec<&CoinRecord> {
        self.coins
            .iter()
            .filter(|coin| coin.matches(&self.search_term))
            .collect()
    }

    //-------------------------------------------------------------------------
    // insight panel
    //-------------------------------------------------------------------------

    pub fn insight(&self) -> &InsightStatus {
        &self.insight
    }

    pub fn insight_visible(&self) -> bool {
        self.insight_visible
    }

    pub fn insight_coin(&self) -> Option<&str> {
        self.insight_coin.as_deref()
    }

    /// Marks a new insight request as pending and shows the panel.
    ///
    /// Any earlier request still in flight is superseded: its ticket will no
    /// longer be accepted by `resolve_insight`.
    pub fn begin_insight(&mut self, coin_name: &str) -> InsightTicket {
        self.last_ticket += 1;
        self.insight = InsightStatus::Pending;
        self.insight_visible = true;
        self.insight_coin = Some(coin_name.to_string());
        InsightTicket(self.last_ticket)
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns false, without touching state, when the request is no longer
    /// the pending one: a newer request was started or the panel was
    /// dismissed in the meantime.
    pub fn resolve_insight(&mut self, ticket: InsightTicket, outcome: InsightOutcome) -> bool {
        if ticket.0 != self.last_ticket || !self.insight.is_pending() {
            dioxus_logger::tracing::debug!("discarding stale insight for request #{}", ticket.0);
            return false;
        }
        self.insight = outcome.into();
        true
    }

    /// Hides the panel and resets it to `Idle`. Requests still in flight keep
    /// running, but their outcome is discarded.
    pub fn dismiss_insight(&mut self) {
        self.insight_visible = false;
        self.insight = InsightStatus::Idle;
        self.insight_coin = None;
    }

    /// Whether the panel flags agree with each other: a non-idle insight is
    /// always visible, and a hidden panel is always idle.
    pub fn is_consistent(&self) -> bool {
        self.insight.is_idle() != self.insight_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::coin::seed_coins;
    use api::insight::GenerateContentRequest;
    use api::insight::GenerateContentResponse;
    use api::insight::InsightError;
    use api::insight::InsightFetcher;
    use api::insight::INSIGHT_FAILED_MESSAGE;
    use api::insight::NO_INSIGHT_MESSAGE;
    use api::insight_providers::TextGenerator;

    fn loaded() -> ViewState {
        let mut state = ViewState::new();
        state.finish_load(Ok::<_, String>(seed_coins())).unwrap();
        state
    }

    fn names(coins: &[&CoinRecord]) -> Vec<String> {
        coins.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn starts_loading_with_nothing_shown() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert_eq!(state.load_error(), None);
        assert!(state.coins().is_empty());
        assert!(state.insight().is_idle());
        assert!(!state.insight_visible());
        assert!(state.is_consistent());
    }

    #[test]
    fn successful_load_clears_loading_flag() {
        let state = loaded();
        assert!(!state.is_loading());
        assert_eq!(state.load_error(), None);
        assert_eq!(state.coins().len(), 8);
    }

    #[test]
    fn failed_load_sets_message_and_keeps_coins_empty() {
        let mut state = ViewState::new();
        state.finish_load(Err("connection refused")).unwrap();

        assert!(!state.is_loading());
        assert_eq!(state.load_error(), Some(LOAD_ERROR_MESSAGE));
        assert!(state.coins().is_empty());
    }

    #[test]
    fn coins_are_set_exactly_once() {
        let mut state = loaded();
        let before = state.clone();

        assert_eq!(
            state.finish_load(Err("late failure")),
            Err(StateError::AlreadyLoaded)
        );
        assert_eq!(
            state.finish_load(Ok::<_, String>(Vec::new())),
            Err(StateError::AlreadyLoaded)
        );
        assert_eq!(state, before);

        let mut failed = ViewState::new();
        failed.finish_load(Err("boom")).unwrap();
        assert!(failed.finish_load(Ok::<_, String>(seed_coins())).is_err());
        assert!(failed.coins().is_empty());
        assert!(failed.load_phase().is_failed());
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let state = loaded();
        let all: Vec<&CoinRecord> = state.coins().iter().collect();
        assert_eq!(state.filtered_coins(), all);
    }

    #[test]
    fn filtered_is_ordered_subset_matching_term() {
        let mut state = loaded();
        for term in ["", "b", "BTC", "coin", "O", "e", "link", "xrp", "  ", "zzz"] {
            state.set_search_term(term);
            let filtered = state.filtered_coins();

            let lowered = term.to_lowercase();
            for coin in &filtered {
                assert!(
                    coin.name.to_lowercase().contains(&lowered)
                        || coin.symbol.to_lowercase().contains(&lowered),
                    "{} does not match {term:?}",
                    coin.name
                );
            }

            // Same relative order as the full list.
            let positions: Vec<usize> = filtered
                .iter()
                .map(|c| state.coins().iter().position(|all| all.id == c.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "reordered for {term:?}");
        }
    }

    #[test]
    fn do_matches_only_dogecoin_and_zzz_matches_nothing() {
        let mut state = loaded();

        state.set_search_term("do");
        assert_eq!(names(&state.filtered_coins()), vec!["Dogecoin"]);

        state.set_search_term("zzz");
        assert!(state.filtered_coins().is_empty());

        state.set_search_term("COIN");
        assert_eq!(
            names(&state.filtered_coins()),
            vec!["Bitcoin", "Dogecoin", "Litecoin"]
        );
    }

    #[test]
    fn search_before_load_is_empty_not_an_error() {
        let mut state = ViewState::new();
        state.set_search_term("btc");
        assert!(state.filtered_coins().is_empty());
    }

    #[test]
    fn begin_insight_shows_pending_panel() {
        let mut state = loaded();
        state.begin_insight("Bitcoin");

        assert!(state.insight().is_pending());
        assert!(state.insight_visible());
        assert_eq!(state.insight_coin(), Some("Bitcoin"));
        assert!(state.is_consistent());
    }

    #[test]
    fn ready_outcome_is_applied_verbatim() {
        let mut state = loaded();
        let ticket = state.begin_insight("Bitcoin");

        assert!(state.resolve_insight(ticket, InsightOutcome::Ready("Digital gold.".into())));
        assert_eq!(state.insight(), &InsightStatus::Ready("Digital gold.".into()));
        assert!(state.insight_visible());
        assert!(state.is_consistent());
    }

    #[test]
    fn soft_and_hard_failures_map_to_status() {
        let mut state = loaded();

        let ticket = state.begin_insight("Ethereum");
        state.resolve_insight(ticket, InsightOutcome::Ready(NO_INSIGHT_MESSAGE.into()));
        assert_eq!(state.insight(), &InsightStatus::Ready(NO_INSIGHT_MESSAGE.into()));

        let ticket = state.begin_insight("Solana");
        state.resolve_insight(ticket, InsightOutcome::Failed(INSIGHT_FAILED_MESSAGE.into()));
        assert_eq!(state.insight(), &InsightStatus::Failed(INSIGHT_FAILED_MESSAGE.into()));
        assert!(state.is_consistent());
    }

    #[test]
    fn dismiss_always_hides_panel() {
        let mut state = loaded();
        state.dismiss_insight();
        assert!(!state.insight_visible());

        state.begin_insight("Bitcoin");
        state.dismiss_insight();
        assert!(!state.insight_visible());
        assert!(state.insight().is_idle());

        let ticket = state.begin_insight("Solana");
        state.resolve_insight(ticket, InsightOutcome::Failed(INSIGHT_FAILED_MESSAGE.into()));
        state.dismiss_insight();
        assert!(!state.insight_visible());
        assert!(state.insight().is_idle());
        assert_eq!(state.insight_coin(), None);
        assert!(state.is_consistent());
    }

    #[test]
    fn outcome_arriving_after_dismiss_is_discarded() {
        let mut state = loaded();
        let ticket = state.begin_insight("Bitcoin");
        state.dismiss_insight();

        assert!(!state.resolve_insight(ticket, InsightOutcome::Ready("late".into())));
        assert!(state.insight().is_idle());
        assert!(!state.insight_visible());
        assert!(state.is_consistent());
    }

    #[test]
    fn newer_request_supersedes_older_one() {
        let mut state = loaded();
        let first = state.begin_insight("Bitcoin");
        let second = state.begin_insight("Ethereum");

        assert!(!state.resolve_insight(first, InsightOutcome::Ready("about bitcoin".into())));
        assert!(state.insight().is_pending());

        assert!(state.resolve_insight(second, InsightOutcome::Ready("about ether".into())));
        assert_eq!(state.insight(), &InsightStatus::Ready("about ether".into()));
        assert_eq!(state.insight_coin(), Some("Ethereum"));

        // Settled requests cannot be resolved twice.
        assert!(!state.resolve_insight(second, InsightOutcome::Failed("x".into())));
    }

    #[test]
    fn next_request_resets_a_settled_panel_to_pending() {
        let mut state = loaded();
        let ticket = state.begin_insight("Bitcoin");
        state.resolve_insight(ticket, InsightOutcome::Ready("text".into()));

        state.begin_insight("Solana");
        assert!(state.insight().is_pending());
        assert!(state.is_consistent());
    }

    #[test]
    fn illegal_flag_combinations_are_detected() {
        let pending_but_hidden = ViewState {
            insight: InsightStatus::Pending,
            insight_visible: false,
            ..ViewState::default()
        };
        assert!(!pending_but_hidden.is_consistent());

        let idle_but_visible = ViewState {
            insight_visible: true,
            ..ViewState::default()
        };
        assert!(!idle_but_visible.is_consistent());
    }

    struct Rejecting;

    impl TextGenerator for Rejecting {
        async fn generate(
            &self,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, InsightError> {
            Err(InsightError::Status(503))
        }
    }

    #[tokio::test]
    async fn rejected_solana_request_shows_failure_message() {
        let mut state = loaded();
        let ticket = state.begin_insight("Solana");
        assert!(state.insight().is_pending());

        let outcome = InsightFetcher::new(Rejecting).fetch("Solana").await;
        assert!(state.resolve_insight(ticket, outcome));

        assert_eq!(
            state.insight(),
            &InsightStatus::Failed(INSIGHT_FAILED_MESSAGE.to_string())
        );
        assert!(state.insight_visible());
        assert_eq!(state.insight_coin(), Some("Solana"));
        assert!(state.is_consistent());
    }

    #[test]
    fn failed_server_call_resolves_to_failure_message() {
        let mut state = loaded();
        let ticket = state.begin_insight("Bitcoin");

        let outcome = InsightOutcome::from_call(Err::<InsightOutcome, _>("connection refused"));
        state.resolve_insight(ticket, outcome);

        assert_eq!(
            state.insight(),
            &InsightStatus::Failed(INSIGHT_FAILED_MESSAGE.to_string())
        );
        assert!(state.insight_visible());
    }
}
