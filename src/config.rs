use chrono::NaiveDate;

use crate::domain::chart::PlotFrame;
use crate::domain::live_rate::LIVE_RATE_UNAVAILABLE;
use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use crate::domain::rates::{BreakdownMode, DateRange, QueryDraft, SummaryQuery};

/// Summary provider prefix baked in at build time, empty for same-origin
pub const API_BASE_ENV: Option<&str> = option_env!("FX_API_BASE");

/// Settings for one dashboard session
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub page_size: usize,
    pub frame: PlotFrame,
    pub default_range: DateRange,
    pub default_breakdown: BreakdownMode,
    pub live_unavailable_message: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE_ENV.unwrap_or_default().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            frame: PlotFrame::default(),
            default_range: DateRange::new(
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
                NaiveDate::from_ymd_opt(2025, 7, 3).unwrap_or_default(),
            ),
            default_breakdown: BreakdownMode::Day,
            live_unavailable_message: LIVE_RATE_UNAVAILABLE.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Page size is at least 1
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_frame(mut self, frame: PlotFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_default_query(mut self, range: DateRange, breakdown: BreakdownMode) -> Self {
        self.default_range = range;
        self.default_breakdown = breakdown;
        self
    }

    pub fn with_live_unavailable_message(mut self, message: impl Into<String>) -> Self {
        self.live_unavailable_message = message.into();
        self
    }

    /// Form contents on first render
    pub fn initial_draft(&self) -> QueryDraft {
        QueryDraft::from_query(SummaryQuery::new(self.default_range, self.default_breakdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 7);
        assert_eq!(config.frame, PlotFrame::new(640.0, 220.0, 24.0));
        assert_eq!(config.live_unavailable_message, "Live rate unavailable");

        let draft = config.initial_draft();
        assert_eq!(draft.start_date, "2025-07-01");
        assert_eq!(draft.end_date, "2025-07-03");
        assert_eq!(draft.breakdown, BreakdownMode::Day);
    }

    #[test]
    fn page_size_has_floor() {
        assert_eq!(DashboardConfig::default().with_page_size(0).page_size, 1);
    }
}
