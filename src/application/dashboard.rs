use std::cell::{Ref, RefCell};

use crate::config::DashboardConfig;
use crate::domain::{
    clock::Clock,
    errors::AppError,
    events::{DashboardEvent, EventDispatcher, Flow, InMemoryEventDispatcher},
    logging::{LogComponent, get_logger},
    rates::{QueryDraft, SummaryQuery, SummaryTransport},
    state::{Completion, SessionState},
};
use crate::infrastructure::http::SummaryClient;

use super::live_rate::LiveRateMonitor;

/// Owns one dashboard session and runs its two request flows.
///
/// The main series flow and the live-rate flow never wait on each other.
/// Within a flow only the most recently issued request may write state;
/// earlier responses are dropped when they arrive. No `RefCell` borrow is
/// held across an await or while events are dispatched, so subscribers may
/// read the session from their handlers.
pub struct DashboardController<T, C> {
    client: SummaryClient<T>,
    clock: C,
    config: DashboardConfig,
    state: RefCell<SessionState>,
    events: InMemoryEventDispatcher,
}

impl<T: SummaryTransport, C: Clock> DashboardController<T, C> {
    pub fn new(config: DashboardConfig, transport: T, clock: C) -> Self {
        get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!("Creating dashboard session (api base: '{}')", config.api_base),
        );
        let state = SessionState::new(config.frame, config.page_size, config.initial_draft());
        Self {
            client: SummaryClient::new(config.api_base.clone(), transport),
            clock,
            config,
            state: RefCell::new(state),
            events: InMemoryEventDispatcher::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> Ref<'_, SessionState> {
        self.state.borrow()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.events.subscribe(handler);
    }

    /// Session start: the live rate is fetched once without user action.
    pub async fn mount(&self) {
        self.refresh_live_rate().await;
    }

    pub fn update_draft(&self, edit: impl FnOnce(&mut QueryDraft)) {
        edit(&mut self.state.borrow_mut().draft);
    }

    // ---------------------------------------------------------------------
    // Main series flow
    // ---------------------------------------------------------------------

    /// Validate the form and fetch its range. A rejected draft issues no
    /// request and leaves the current series in place.
    pub async fn submit(&self) -> Result<Completion, AppError> {
        let parsed = self.state.borrow().draft.to_query();
        match parsed {
            Ok(query) => self.submit_query(query).await,
            Err(error) => {
                self.state.borrow_mut().reject_draft(&error);
                get_logger().warn(
                    LogComponent::Application("Dashboard"),
                    &format!("Query rejected: {}", error),
                );
                self.events.publish(DashboardEvent::DraftRejected { message: error.to_string() });
                Err(error.into())
            }
        }
    }

    pub async fn submit_query(&self, query: SummaryQuery) -> Result<Completion, AppError> {
        let seq = self.state.borrow_mut().begin_series_request();
        crate::log_info!(
            LogComponent::Application("Dashboard"),
            "Requesting {} ({}) as #{}",
            query.range,
            query.mode,
            seq
        );
        self.events.publish(DashboardEvent::SeriesRequested { query, seq });

        let outcome = self.client.fetch_summary(&query.range, query.mode).await;
        let loaded = outcome
            .as_ref()
            .map(|r| (r.days.len(), r.source.clone()))
            .map_err(|e| e.clone());

        let completion = self.state.borrow_mut().complete_series_request(seq, query, outcome);
        match (completion, loaded) {
            (Completion::Stale { latest }, _) => {
                self.discard_stale(Flow::Series, seq, latest);
                Ok(completion)
            }
            (Completion::Applied, Ok((day_count, source))) => {
                crate::log_info!(
                    LogComponent::Application("Dashboard"),
                    "#{} loaded {} days from {}",
                    seq,
                    day_count,
                    source
                );
                self.events.publish(DashboardEvent::SeriesLoaded { seq, day_count, source });
                Ok(completion)
            }
            (Completion::Applied, Err(error)) => {
                self.events.publish(DashboardEvent::SeriesFailed { seq, message: error.message.clone() });
                Err(error.into())
            }
        }
    }

    // ---------------------------------------------------------------------
    // Pagination and hover
    // ---------------------------------------------------------------------

    pub fn next_page(&self) -> bool {
        let changed = self.state.borrow_mut().next_page();
        self.publish_page_change(changed)
    }

    pub fn prev_page(&self) -> bool {
        let changed = self.state.borrow_mut().prev_page();
        self.publish_page_change(changed)
    }

    /// Pointer-enter or focus on point `index`; `None` for leave or blur.
    pub fn set_hover(&self, index: Option<usize>) -> bool {
        let changed = self.state.borrow_mut().set_hover(index);
        if changed {
            let index = self.state.borrow().hover().index();
            self.events.publish(DashboardEvent::HoverChanged { index });
        }
        changed
    }

    pub fn clear_hover(&self) -> bool {
        self.set_hover(None)
    }

    // ---------------------------------------------------------------------
    // Live rate flow
    // ---------------------------------------------------------------------

    /// Fetch today's rate. A failure keeps the last known rate and shows the
    /// configured unavailable message; the transport error is only logged.
    pub async fn refresh_live_rate(&self) {
        let seq = self.state.borrow_mut().begin_live_refresh();
        self.events.publish(DashboardEvent::LiveRateRequested { seq });

        let today = self.clock.today();
        let fetched = LiveRateMonitor::new(&self.client).fetch(today).await;
        let completed_at = self.clock.now();

        let outcome = match &fetched {
            Ok(rate) => Ok(*rate),
            Err(_) => Err(self.config.live_unavailable_message.as_str()),
        };
        let completion = self.state.borrow_mut().complete_live_refresh(seq, outcome, completed_at);

        match (completion, fetched) {
            (Completion::Stale { latest }, _) => self.discard_stale(Flow::LiveRate, seq, latest),
            (Completion::Applied, Ok(rate)) => {
                crate::log_debug!(LogComponent::Application("Dashboard"), "Live rate #{} = {:?}", seq, rate);
                self.events.publish(DashboardEvent::LiveRateUpdated { rate });
            }
            (Completion::Applied, Err(_)) => self.events.publish(DashboardEvent::LiveRateFailed),
        }
    }

    fn publish_page_change(&self, changed: bool) -> bool {
        if changed {
            let page_index = self.state.borrow().page().page_index();
            self.events.publish(DashboardEvent::PageChanged { page_index });
        }
        changed
    }

    fn discard_stale(&self, flow: Flow, seq: u64, latest: u64) {
        get_logger().debug(
            LogComponent::Application("Dashboard"),
            &format!("Discarding {} response #{} (latest #{})", flow, seq, latest),
        );
        self.events.publish(DashboardEvent::StaleResponseDiscarded { flow, seq, latest });
    }
}
