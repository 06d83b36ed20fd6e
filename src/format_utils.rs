use chrono::{DateTime, TimeZone};

use crate::domain::rates::SummaryResult;

/// Shown wherever a numeric value is absent
pub const PLACEHOLDER: &str = "—";

/// Rate with exactly four fractional digits.
///
/// - `Some(1.08)` -> `1.0800`
/// - `None` -> `—`
pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percentage with four fractional digits and a trailing `%`. The sign is
/// kept as given.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}%", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Wall-clock `HH:MM:SS` in the timestamp's own zone
pub fn format_clock_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}

/// Text or the placeholder when missing or empty
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `HIT`/`MISS` badge text, the placeholder before any series loads
pub fn cache_badge(result: Option<&SummaryResult>) -> &'static str {
    match result {
        Some(r) if r.is_cache_hit() => "HIT",
        Some(_) => "MISS",
        None => PLACEHOLDER,
    }
}
