use std::cell::OnceCell;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::domain::chart::{PlotFrame, PlotPoint, TooltipData, to_plot, tooltip};
use crate::domain::errors::{RequestError, ValidationError};
use crate::domain::interaction::HoverState;
use crate::domain::live_rate::LiveRate;
use crate::domain::pagination::PageState;
use crate::domain::rates::{BreakdownMode, QueryDraft, RateDay, SummaryQuery, SummaryResult};

/// A successfully fetched series together with the query that produced it.
///
/// Plot points are computed on first use and cached for the lifetime of
/// this value; a new fetch builds a new `LoadedSeries`, which drops the
/// cache with it.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub query: SummaryQuery,
    pub result: Rc<SummaryResult>,
    plot: OnceCell<Vec<PlotPoint>>,
}

impl LoadedSeries {
    pub fn new(query: SummaryQuery, result: SummaryResult) -> Self {
        Self { query, result: Rc::new(result), plot: OnceCell::new() }
    }

    pub fn days(&self) -> &[RateDay] {
        &self.result.days
    }

    pub fn plot_points(&self, frame: &PlotFrame) -> &[PlotPoint] {
        self.plot.get_or_init(|| to_plot(&self.result.days, frame))
    }
}

/// How a completed request was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request of the same flow was issued meanwhile
    Stale { latest: u64 },
}

/// Everything one dashboard view owns. All mutation goes through the
/// transition methods below; derived views are computed from the current
/// series on demand.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Fixed for the session; cached plot points assume it never changes.
    frame: PlotFrame,
    pub draft: QueryDraft,
    pub loading: bool,
    pub error: Option<String>,
    series: Option<LoadedSeries>,
    page: PageState,
    hover: HoverState,
    series_seq: u64,
    live: LiveRate,
    live_seq: u64,
}

impl SessionState {
    pub fn new(frame: PlotFrame, page_size: usize, draft: QueryDraft) -> Self {
        Self {
            frame,
            draft,
            loading: false,
            error: None,
            series: None,
            page: PageState::new(page_size),
            hover: HoverState::Idle,
            series_seq: 0,
            live: LiveRate::default(),
            live_seq: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Main series flow
    // ---------------------------------------------------------------------

    /// Start a series request and return its sequence number. The current
    /// series stays visible until the response arrives.
    pub fn begin_series_request(&mut self) -> u64 {
        self.series_seq += 1;
        self.loading = true;
        self.error = None;
        self.series_seq
    }

    /// Form input was rejected before any request was made
    pub fn reject_draft(&mut self, error: &ValidationError) {
        self.error = Some(error.to_string());
    }

    pub fn complete_series_request(
        &mut self,
        seq: u64,
        query: SummaryQuery,
        outcome: Result<SummaryResult, RequestError>,
    ) -> Completion {
        if seq != self.series_seq {
            return Completion::Stale { latest: self.series_seq };
        }
        self.loading = false;
        match outcome {
            Ok(result) => self.replace_series(Some(LoadedSeries::new(query, result))),
            Err(error) => {
                self.replace_series(None);
                self.error = Some(error.message);
            }
        }
        Completion::Applied
    }

    /// Swap the series; page and hover always reset.
    fn replace_series(&mut self, series: Option<LoadedSeries>) {
        self.series = series;
        self.page.reset();
        self.hover = HoverState::Idle;
    }

    // ---------------------------------------------------------------------
    // Pagination and hover
    // ---------------------------------------------------------------------

    pub fn next_page(&mut self) -> bool {
        let len = self.days().len();
        self.page.next(len)
    }

    pub fn prev_page(&mut self) -> bool {
        let len = self.days().len();
        self.page.prev(len)
    }

    pub fn set_hover(&mut self, index: Option<usize>) -> bool {
        let len = self.days().len();
        self.hover.set(index, len)
    }

    pub fn clear_hover(&mut self) -> bool {
        self.hover.clear()
    }

    // ---------------------------------------------------------------------
    // Live rate flow
    // ---------------------------------------------------------------------

    pub fn begin_live_refresh(&mut self) -> u64 {
        self.live_seq += 1;
        self.live_seq
    }

    /// `Ok` carries the end-of-range rate (possibly absent); `Err` carries
    /// the fixed display message.
    pub fn complete_live_refresh(
        &mut self,
        seq: u64,
        outcome: Result<Option<f64>, &str>,
        completed_at: DateTime<Local>,
    ) -> Completion {
        if seq != self.live_seq {
            return Completion::Stale { latest: self.live_seq };
        }
        match outcome {
            Ok(rate) => self.live.apply_success(rate, completed_at),
            Err(message) => self.live.apply_failure(message),
        }
        Completion::Applied
    }

    // ---------------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------------

    pub fn series(&self) -> Option<&LoadedSeries> {
        self.series.as_ref()
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        self.series.as_ref().map(|s| s.result.as_ref())
    }

    pub fn days(&self) -> &[RateDay] {
        self.series.as_ref().map(LoadedSeries::days).unwrap_or(&[])
    }

    pub fn plot_points(&self) -> &[PlotPoint] {
        match &self.series {
            Some(series) => series.plot_points(&self.frame),
            None => &[],
        }
    }

    /// Chart, table and pagination only apply to a non-empty per-day series
    pub fn chart_visible(&self) -> bool {
        self.series
            .as_ref()
            .is_some_and(|s| s.query.mode == BreakdownMode::Day && !s.days().is_empty())
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn paged_days(&self) -> &[RateDay] {
        self.page.slice(self.days())
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.days().len())
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn tooltip(&self) -> Option<TooltipData> {
        tooltip(self.plot_points(), self.hover.index(), &self.frame)
    }

    pub fn live(&self) -> &LiveRate {
        &self.live
    }

    pub fn series_seq(&self) -> u64 {
        self.series_seq
    }

    pub fn live_seq(&self) -> u64 {
        self.live_seq
    }
}
