use chrono::NaiveDate;

use crate::domain::{
    errors::RequestError,
    logging::LogComponent,
    rates::{BreakdownMode, DateRange, SummaryQuery, SummaryTransport},
};
use crate::infrastructure::http::SummaryClient;

/// Fetches the same-day spot rate.
///
/// Borrowing the session's client keeps the transport shared with the
/// main series flow while each refresh stays its own request.
pub struct LiveRateMonitor<'a, T> {
    client: &'a SummaryClient<T>,
}

impl<'a, T: SummaryTransport> LiveRateMonitor<'a, T> {
    pub fn new(client: &'a SummaryClient<T>) -> Self {
        Self { client }
    }

    /// `start = end = today`, no breakdown
    pub fn snapshot_query(today: NaiveDate) -> SummaryQuery {
        SummaryQuery::new(DateRange::single_day(today), BreakdownMode::None)
    }

    /// End-of-range rate for `today`, `None` when the provider omits it.
    pub async fn fetch(&self, today: NaiveDate) -> Result<Option<f64>, RequestError> {
        let query = Self::snapshot_query(today);
        let result = self.client.fetch_summary(&query.range, query.mode).await.inspect_err(|e| {
            crate::log_warn!(LogComponent::Application("LiveRateMonitor"), "Live rate for {} unavailable: {}", today, e);
        })?;
        Ok(result.end_rate())
    }
}
