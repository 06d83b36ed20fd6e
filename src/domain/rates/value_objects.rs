use chrono::NaiveDate;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::ValidationError;

/// Value Object - requested date range.
///
/// Ordering of `start` and `end` is not enforced; an inverted range is
/// forwarded to the summary provider as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor, Display, Serialize, Deserialize)]
#[display(fmt = "{}..{}", start, end)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Single-day range used by the live rate
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }
}

/// Value Object - whether the provider returns a per-day series
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum BreakdownMode {
    #[default]
    #[strum(serialize = "day")]
    #[serde(rename = "day")]
    Day,

    #[strum(serialize = "none")]
    #[serde(rename = "none")]
    None,
}

impl BreakdownMode {
    pub fn as_query_value(&self) -> &str {
        self.as_ref()
    }

    /// Label for the breakdown selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::None => "None",
        }
    }
}

/// Value Object - a validated summary request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct SummaryQuery {
    pub range: DateRange,
    pub mode: BreakdownMode,
}

/// Raw form input. Dates are kept as typed so the form can hold partial or
/// empty values; `to_query` enforces the required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDraft {
    pub start_date: String,
    pub end_date: String,
    pub breakdown: BreakdownMode,
}

impl QueryDraft {
    pub fn from_query(query: SummaryQuery) -> Self {
        Self {
            start_date: query.range.start.to_string(),
            end_date: query.range.end.to_string(),
            breakdown: query.mode,
        }
    }

    pub fn to_query(&self) -> Result<SummaryQuery, ValidationError> {
        let start = parse_required_date(&self.start_date, "Start date")?;
        let end = parse_required_date(&self.end_date, "End date")?;
        Ok(SummaryQuery::new(DateRange::new(start, end), self.breakdown))
    }
}

fn parse_required_date(raw: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(field))
}
