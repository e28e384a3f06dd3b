//! Detail-view controller: fetch-cycle orchestration, loading/error gate,
//! and the exclusive view-state machine
//!
//! One controller instance is bound to the currently displayed identifier.
//! Every mutation originates from single-threaded event handling; the only
//! cross-cycle hazard is a response for a superseded identifier, which the
//! apply step discards by ticket equality.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::detail_view::application::ports::CatalogClient;
use crate::modules::detail_view::application::use_cases::LoadDetailViewHandler;
use crate::modules::detail_view::domain::{
    AnimeId, DerivedStats, DetailAggregate, DetailTab, ViewState,
};
use crate::shared::errors::{AppError, AppResult};

/// Render mode exposed to the UI
#[derive(Debug, Clone)]
pub enum ViewPhase {
    /// No aggregate is safe to render: either a fetch cycle is in flight, or
    /// the controller has not been bound to an identifier yet
    Loading,
    /// Aggregate published; derived stats and view state are safe to read
    Ready,
    /// The mandatory detail resource could not be obtained
    Failed(AppError),
}

impl ViewPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewPhase::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewPhase::Failed(_))
    }
}

/// Handle for one fetch cycle, issued by `set_anime` / `reload`
///
/// Carries the identifier and generation the cycle belongs to, so a result
/// can be checked for staleness when it finally settles.
#[derive(Debug, Clone)]
pub struct CycleTicket {
    id: AnimeId,
    generation: u64,
    cancel: CancellationToken,
}

impl CycleTicket {
    pub fn id(&self) -> AnimeId {
        self.id
    }

    /// Advisory: true once a newer cycle has superseded this one
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Settled result of one cycle, tagged with its ticket identity
#[derive(Debug)]
pub struct CycleOutcome {
    id: AnimeId,
    generation: u64,
    result: AppResult<DetailAggregate>,
}

impl CycleOutcome {
    pub fn id(&self) -> AnimeId {
        self.id
    }
}

/// Controller owning the aggregate, derived stats, and view state for the
/// currently displayed anime
pub struct DetailViewController<C: CatalogClient> {
    handler: LoadDetailViewHandler<C>,
    current: Option<AnimeId>,
    generation: u64,
    stats_generation: u64,
    phase: ViewPhase,
    aggregate: Option<DetailAggregate>,
    derived: Option<DerivedStats>,
    view_state: ViewState,
    cancel: CancellationToken,
}

impl<C: CatalogClient> DetailViewController<C> {
    /// A controller is constructed for a detail view and bound with
    /// `set_anime` / `load` right away. Until that first binding the gate
    /// reports `Loading`: there is nothing renderable either way, and the
    /// UI must never see stale data.
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            handler: LoadDetailViewHandler::new(catalog),
            current: None,
            generation: 0,
            stats_generation: 0,
            phase: ViewPhase::Loading,
            aggregate: None,
            derived: None,
            view_state: ViewState::default(),
            cancel: CancellationToken::new(),
        }
    }

    // ------------------------------------------------------------------
    // Fetch cycle
    // ------------------------------------------------------------------

    /// Bind the controller to a new identifier.
    ///
    /// Synchronously: supersedes any in-flight cycle (advisory cancel), drops
    /// the old aggregate, resets the view state to its defaults, and gates to
    /// `Loading` before the new cycle issues a single request.
    pub fn set_anime(&mut self, id: AnimeId) -> CycleTicket {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;

        self.current = Some(id);
        self.phase = ViewPhase::Loading;
        self.aggregate = None;
        self.derived = None;
        self.view_state.reset();

        log::info!("Detail view bound to anime '{}'", id);

        CycleTicket {
            id,
            generation: self.generation,
            cancel: self.cancel.clone(),
        }
    }

    /// Explicit external re-trigger for the current identifier.
    ///
    /// Starts a fresh cycle without resetting the view state (the identifier
    /// has not changed). Returns `None` when no identifier is bound yet.
    pub fn reload(&mut self) -> Option<CycleTicket> {
        let id = self.current?;

        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;

        self.phase = ViewPhase::Loading;
        self.aggregate = None;
        self.derived = None;

        log::info!("Reloading detail view for anime '{}'", id);

        Some(CycleTicket {
            id,
            generation: self.generation,
            cancel: self.cancel.clone(),
        })
    }

    /// Run the fetch cycle for a ticket: fan-out, fan-in, merge.
    ///
    /// Safe to call for a superseded ticket; the outcome is tagged and the
    /// apply step will discard it.
    pub async fn run_cycle(&self, ticket: CycleTicket) -> CycleOutcome {
        let outcome = self.handler.fetch(ticket.id).await;

        if ticket.is_cancelled() {
            log::debug!(
                "Cycle for anime '{}' settled after being superseded",
                ticket.id
            );
        }

        CycleOutcome {
            id: ticket.id,
            generation: ticket.generation,
            result: self.handler.build(ticket.id, outcome),
        }
    }

    /// Apply a settled cycle to the controller.
    ///
    /// Stale guard: the outcome is discarded unless its identifier and
    /// generation still match the controller's current cycle. Returns whether
    /// the outcome was applied.
    pub fn apply_cycle(&mut self, outcome: CycleOutcome) -> bool {
        let is_current = outcome.generation == self.generation
            && self.current == Some(outcome.id);
        if !is_current {
            log::debug!(
                "Discarding stale result for anime '{}' (current: {:?})",
                outcome.id,
                self.current
            );
            return false;
        }

        match outcome.result {
            Ok(aggregate) => {
                self.derived = Some(DerivedStats::from_aggregate(&aggregate));
                self.stats_generation += 1;
                self.aggregate = Some(aggregate);
                self.phase = ViewPhase::Ready;
            }
            Err(e) => {
                log::error!("Detail fetch failed for anime '{}': {}", outcome.id, e);
                self.phase = ViewPhase::Failed(e);
            }
        }
        true
    }

    /// Convenience: bind, fetch, and apply in one call.
    pub async fn load(&mut self, id: AnimeId) {
        let ticket = self.set_anime(id);
        let outcome = self.run_cycle(ticket).await;
        self.apply_cycle(outcome);
    }

    // ------------------------------------------------------------------
    // View-state transitions (user actions)
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.view_state.select_tab(tab);
    }

    pub fn toggle_trailer(&mut self) {
        let has_trailer = self.aggregate.as_ref().is_some_and(|a| a.has_trailer());
        self.view_state.toggle_trailer(has_trailer);
    }

    pub fn close_trailer(&mut self) {
        self.view_state.close_trailer();
    }

    pub fn toggle_favorite(&mut self) {
        self.view_state.toggle_favorite();
    }

    /// Whether the trailer modal should render right now
    pub fn trailer_visible(&self) -> bool {
        let has_trailer = self.aggregate.as_ref().is_some_and(|a| a.has_trailer());
        self.view_state.trailer_visible(has_trailer)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn current_id(&self) -> Option<AnimeId> {
        self.current
    }

    pub fn aggregate(&self) -> Option<&DetailAggregate> {
        self.aggregate.as_ref()
    }

    pub fn derived_stats(&self) -> Option<&DerivedStats> {
        self.derived.as_ref()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Bumped once per aggregate publication; lets tests verify derived
    /// stats are not recomputed by unrelated view-state churn
    pub fn stats_generation(&self) -> u64 {
        self.stats_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::detail_view::domain::{AnimeDetail, CastEntry, RecommendationEntry};
    use crate::shared::errors::AppResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedCatalog {
        details: Mutex<Vec<(u32, AppResult<AnimeDetail>)>>,
    }

    impl ScriptedCatalog {
        fn with_detail(id: u32, detail: AppResult<AnimeDetail>) -> Self {
            Self {
                details: Mutex::new(vec![(id, detail)]),
            }
        }

        fn push(&self, id: u32, detail: AppResult<AnimeDetail>) {
            self.details.lock().unwrap().push((id, detail));
        }
    }

    #[async_trait]
    impl CatalogClient for ScriptedCatalog {
        async fn fetch_detail(&self, id: AnimeId) -> AppResult<AnimeDetail> {
            self.details
                .lock()
                .unwrap()
                .iter()
                .find(|(scripted, _)| *scripted == id.value())
                .map(|(_, result)| result.clone())
                .unwrap_or_else(|| Err(AppError::NotFound(format!("anime {}", id))))
        }

        async fn fetch_cast(&self, _id: AnimeId) -> AppResult<Vec<CastEntry>> {
            Ok(vec![])
        }

        async fn fetch_recommendations(&self, _id: AnimeId) -> AppResult<Vec<RecommendationEntry>> {
            Ok(vec![])
        }
    }

    fn detail(title: &str, trailer: Option<&str>) -> AnimeDetail {
        AnimeDetail {
            title: title.to_string(),
            score: Some(8.75),
            episodes: Some(26),
            status: Some("Finished Airing".to_string()),
            kind: Some("TV".to_string()),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            aired: Some("Apr 3, 1998 to Apr 24, 1999".to_string()),
            duration: None,
            synopsis: None,
            trailer_embed_url: trailer.map(str::to_string),
            poster_url: None,
            popularity: Some(43),
        }
    }

    #[tokio::test]
    async fn successful_load_reaches_ready() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            1,
            Ok(detail("Cowboy Bebop", None)),
        ));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(1)).await;

        assert!(controller.phase().is_ready());
        assert_eq!(controller.aggregate().unwrap().id(), AnimeId::new(1));
        let stats = controller.derived_stats().unwrap();
        assert!((stats.score_percentage - 87.5).abs() < 0.001);
    }

    #[tokio::test]
    async fn detail_failure_reaches_failed_with_no_aggregate() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            2,
            Err(AppError::ExternalServiceError("network down".to_string())),
        ));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(2)).await;

        assert!(controller.phase().is_failed());
        assert!(controller.aggregate().is_none());
        assert!(controller.derived_stats().is_none());
    }

    #[tokio::test]
    async fn unbound_controller_gates_loading_with_nothing_renderable() {
        let catalog = Arc::new(ScriptedCatalog::default());
        let controller = DetailViewController::new(catalog);

        assert!(controller.phase().is_loading());
        assert!(controller.current_id().is_none());
        assert!(controller.aggregate().is_none());
        assert!(controller.derived_stats().is_none());
    }

    #[tokio::test]
    async fn set_anime_gates_to_loading_synchronously() {
        let catalog = Arc::new(ScriptedCatalog::default());
        let mut controller = DetailViewController::new(catalog);

        let _ticket = controller.set_anime(AnimeId::new(1));
        assert!(controller.phase().is_loading());
        assert!(controller.aggregate().is_none());
    }

    #[tokio::test]
    async fn stale_outcome_is_discarded() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(1, Ok(detail("Old", None))));
        catalog.push(2, Ok(detail("New", None)));
        let mut controller = DetailViewController::new(Arc::clone(&catalog));

        // Cycle for "1" starts, then the identifier changes before it settles
        let old_ticket = controller.set_anime(AnimeId::new(1));
        let new_ticket = controller.set_anime(AnimeId::new(2));
        assert!(old_ticket.is_cancelled());

        let new_outcome = controller.run_cycle(new_ticket).await;
        assert!(controller.apply_cycle(new_outcome));

        let old_outcome = controller.run_cycle(old_ticket).await;
        assert!(!controller.apply_cycle(old_outcome));

        assert_eq!(controller.aggregate().unwrap().detail().title, "New");
        assert!(controller.phase().is_ready());
    }

    #[tokio::test]
    async fn identifier_change_resets_view_state() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            1,
            Ok(detail("Cowboy Bebop", Some("https://youtube.com/embed/abc"))),
        ));
        catalog.push(2, Ok(detail("Trigun", None)));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(1)).await;
        controller.select_tab(DetailTab::Characters);
        controller.toggle_favorite();
        controller.select_tab(DetailTab::Details);
        controller.toggle_trailer();
        assert!(controller.view_state().trailer_open());

        controller.load(AnimeId::new(2)).await;
        assert_eq!(controller.view_state(), &ViewState::default());
    }

    #[tokio::test]
    async fn view_state_churn_does_not_recompute_stats() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            1,
            Ok(detail("Cowboy Bebop", None)),
        ));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(1)).await;
        let generation = controller.stats_generation();

        controller.select_tab(DetailTab::Recommendations);
        controller.toggle_favorite();
        controller.toggle_trailer();

        assert_eq!(controller.stats_generation(), generation);
    }

    #[tokio::test]
    async fn trailer_toggle_is_noop_without_trailer() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            1,
            Ok(detail("Cowboy Bebop", None)),
        ));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(1)).await;
        controller.toggle_trailer();
        assert!(!controller.view_state().trailer_open());
        assert!(!controller.trailer_visible());
    }

    #[tokio::test]
    async fn reload_keeps_view_state_but_restarts_the_cycle() {
        let catalog = Arc::new(ScriptedCatalog::with_detail(
            1,
            Ok(detail("Cowboy Bebop", None)),
        ));
        let mut controller = DetailViewController::new(catalog);

        controller.load(AnimeId::new(1)).await;
        controller.toggle_favorite();

        let ticket = controller.reload().expect("identifier bound");
        assert!(controller.phase().is_loading());
        assert!(controller.view_state().favorited());

        let outcome = controller.run_cycle(ticket).await;
        assert!(controller.apply_cycle(outcome));
        assert!(controller.phase().is_ready());
    }

    #[tokio::test]
    async fn reload_without_identifier_is_none() {
        let catalog = Arc::new(ScriptedCatalog::default());
        let mut controller = DetailViewController::new(catalog);
        assert!(controller.reload().is_none());
    }
}
