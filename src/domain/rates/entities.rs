use chrono::NaiveDate;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use super::value_objects::BreakdownMode;

/// One day's quoted rate. `pct_change` is passed through as the provider
/// computed it.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct RateDay {
    pub date: NaiveDate,
    pub rate: f64,
    pub pct_change: Option<f64>,
}

/// Provider-computed aggregate over the requested range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub start_rate: Option<f64>,
    pub end_rate: Option<f64>,
    pub total_pct_change: Option<f64>,
    pub mean_rate: Option<f64>,
}

/// Where the provider served the result from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Result of one summary request. Replaced wholesale on every successful
/// fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    pub source: String,
    pub totals: Option<Totals>,
    pub days: Vec<RateDay>,
    pub breakdown: Option<BreakdownMode>,
    pub cache_status: Option<CacheStatus>,
}

impl SummaryResult {
    pub fn new(source: impl Into<String>, totals: Option<Totals>, days: Vec<RateDay>) -> Self {
        Self { source: source.into(), totals, days, breakdown: None, cache_status: None }
    }

    /// End-of-range rate, the value shown as the live rate
    pub fn end_rate(&self) -> Option<f64> {
        self.totals.and_then(|t| t.end_rate)
    }

    pub fn is_cache_hit(&self) -> bool {
        match self.cache_status {
            Some(status) => status == CacheStatus::Hit,
            None => self.source == "cache",
        }
    }

    /// Lowest and highest rate of the series
    pub fn rate_bounds(&self) -> Option<(f64, f64)> {
        rate_bounds(&self.days)
    }
}

pub fn rate_bounds(days: &[RateDay]) -> Option<(f64, f64)> {
    let first = days.first()?.rate;
    Some(days.iter().fold((first, first), |(min, max), day| (min.min(day.rate), max.max(day.rate))))
}
