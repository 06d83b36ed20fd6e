use chrono::{DateTime, Local};

use crate::domain::errors::LiveRateError;
use crate::format_utils::{PLACEHOLDER, format_clock_time, format_rate};

pub const LIVE_RATE_UNAVAILABLE: &str = "Live rate unavailable";

/// Same-day spot rate, refreshed independently of the main series.
///
/// A failed refresh keeps the last known `rate` and `updated_at` so a stale
/// value stays visible next to the error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveRate {
    pub rate: Option<f64>,
    pub updated_at: Option<DateTime<Local>>,
    pub error: Option<LiveRateError>,
}

impl LiveRate {
    pub fn apply_success(&mut self, rate: Option<f64>, completed_at: DateTime<Local>) {
        self.rate = rate;
        self.updated_at = Some(completed_at);
        self.error = None;
    }

    pub fn apply_failure(&mut self, display_message: &str) {
        self.error = Some(LiveRateError { display_message: display_message.to_string() });
    }

    /// Error text if the last refresh failed, else the formatted rate
    pub fn value_label(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => format_rate(self.rate),
        }
    }

    pub fn updated_label(&self) -> String {
        self.updated_at
            .map(|at| format_clock_time(&at))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 7, 3, h, m, s).single().unwrap()
    }

    #[test]
    fn failure_keeps_previous_value() {
        let mut live = LiveRate::default();
        live.apply_success(Some(1.081), at(9, 0, 0));
        live.apply_failure(LIVE_RATE_UNAVAILABLE);

        assert_eq!(live.rate, Some(1.081));
        assert_eq!(live.updated_at, Some(at(9, 0, 0)));
        assert_eq!(live.value_label(), LIVE_RATE_UNAVAILABLE);
        assert_eq!(live.updated_label(), "09:00:00");
    }

    #[test]
    fn success_clears_error() {
        let mut live = LiveRate::default();
        live.apply_failure(LIVE_RATE_UNAVAILABLE);
        live.apply_success(None, at(10, 15, 30));
        assert_eq!(live.error, None);
        assert_eq!(live.value_label(), "—");
        assert_eq!(live.updated_label(), "10:15:30");
    }

    #[test]
    fn fresh_state_shows_placeholders() {
        let live = LiveRate::default();
        assert_eq!(live.value_label(), "—");
        assert_eq!(live.updated_label(), "—");
    }
}
