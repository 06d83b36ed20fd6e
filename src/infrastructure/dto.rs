use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::rates::{BreakdownMode, CacheStatus, RateDay, SummaryResult, Totals};

/// Body of `GET /summary`
#[derive(Debug, Deserialize)]
pub struct SummaryResponseDto {
    #[serde(default)]
    pub source: String,
    pub totals: Option<TotalsDto>,
    pub days: Option<Vec<DayRateDto>>,
    pub breakdown: Option<String>,
    pub cache_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TotalsDto {
    pub start_rate: Option<f64>,
    pub end_rate: Option<f64>,
    pub total_pct_change: Option<f64>,
    pub mean_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DayRateDto {
    pub date: NaiveDate,
    pub rate: f64,
    pub pct_change: Option<f64>,
}

impl SummaryResponseDto {
    /// Converts the DTO into the domain result. `days: null` and a missing
    /// `days` both become an empty series; unknown `breakdown` or
    /// `cache_status` values are dropped.
    pub fn into_domain(self) -> SummaryResult {
        SummaryResult {
            source: self.source,
            totals: self.totals.map(TotalsDto::into_domain),
            days: self.days.unwrap_or_default().into_iter().map(DayRateDto::into_domain).collect(),
            breakdown: self.breakdown.as_deref().and_then(|b| BreakdownMode::from_str(b).ok()),
            cache_status: self.cache_status.as_deref().and_then(parse_cache_status),
        }
    }
}

impl TotalsDto {
    pub fn into_domain(self) -> Totals {
        Totals {
            start_rate: self.start_rate,
            end_rate: self.end_rate,
            total_pct_change: self.total_pct_change,
            mean_rate: self.mean_rate,
        }
    }
}

impl DayRateDto {
    pub fn into_domain(self) -> RateDay {
        RateDay::new(self.date, self.rate, self.pct_change)
    }
}

fn parse_cache_status(raw: &str) -> Option<CacheStatus> {
    match raw {
        "hit" => Some(CacheStatus::Hit),
        "miss" => Some(CacheStatus::Miss),
        _ => None,
    }
}
