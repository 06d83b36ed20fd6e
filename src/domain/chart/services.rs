use super::value_objects::{PlotFrame, PlotPoint};
use crate::domain::rates::{RateDay, rate_bounds};

pub const POINT_RADIUS: f64 = 3.0;
pub const ACTIVE_POINT_RADIUS: f64 = 5.0;

/// Scale a day series into `frame`.
///
/// Rates are mapped linearly into `[padding, height - padding]` with the
/// y-axis inverted, so the highest rate sits nearest the top. A flat series
/// lands on the bottom line. A single point sits on the left padding
/// boundary.
pub fn to_plot(days: &[RateDay], frame: &PlotFrame) -> Vec<PlotPoint> {
    let Some((min_rate, max_rate)) = rate_bounds(days) else {
        return Vec::new();
    };
    let step = frame.inner_width() / days.len().saturating_sub(1).max(1) as f64;

    days.iter()
        .enumerate()
        .map(|(i, day)| PlotPoint {
            x: frame.padding + i as f64 * step,
            y: frame.height - frame.padding - normalize(day.rate, min_rate, max_rate) * frame.inner_height(),
            day: *day,
        })
        .collect()
}

/// Position of `rate` within `[min, max]` as a fraction in `[0, 1]`
fn normalize(rate: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let t = if span == 0.0 {
        0.0
    } else if span.is_finite() {
        (rate - min) / span
    } else {
        // span overflowed; halving keeps every difference finite
        (rate / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };
    t.clamp(0.0, 1.0)
}

/// `"x,y x,y ..."` for an SVG polyline
pub fn polyline_points(points: &[PlotPoint]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

pub fn point_radius(index: usize, highlighted: Option<usize>) -> f64 {
    if highlighted == Some(index) { ACTIVE_POINT_RADIUS } else { POINT_RADIUS }
}

/// What the tooltip shows for the highlighted point
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    pub date: String,
    pub rate: String,
    pub left_percent: f64,
}

impl TooltipData {
    pub fn for_point(point: &PlotPoint, frame: &PlotFrame) -> Self {
        Self {
            date: point.day.date.to_string(),
            rate: crate::format_utils::format_rate(Some(point.day.rate)),
            left_percent: frame.x_percent(point.x),
        }
    }
}

pub fn tooltip(points: &[PlotPoint], highlighted: Option<usize>, frame: &PlotFrame) -> Option<TooltipData> {
    highlighted
        .and_then(|i| points.get(i))
        .map(|point| TooltipData::for_point(point, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn days(rates: &[f64]) -> Vec<RateDay> {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        rates
            .iter()
            .enumerate()
            .map(|(i, r)| RateDay::new(start + chrono::Days::new(i as u64), *r, None))
            .collect()
    }

    #[test]
    fn empty_series_has_no_points() {
        assert!(to_plot(&[], &PlotFrame::default()).is_empty());
        assert_eq!(polyline_points(&[]), "");
    }

    #[test]
    fn single_point_sits_on_left_padding() {
        let frame = PlotFrame::default();
        let points = to_plot(&days(&[1.08]), &frame);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 24.0);
        assert_eq!(points[0].y, 196.0);
    }

    #[test]
    fn extremes_touch_padding_lines() {
        let frame = PlotFrame::default();
        let points = to_plot(&days(&[1.08, 1.082, 1.0795]), &frame);
        assert_eq!(points[0].x, 24.0);
        assert_eq!(points[1].x, 320.0);
        assert_eq!(points[2].x, 616.0);
        // highest rate at the top, lowest at the bottom
        assert!((points[1].y - 24.0).abs() < 1e-9);
        assert!((points[2].y - 196.0).abs() < 1e-9);
    }

    #[test]
    fn huge_rate_span_stays_inside_frame() {
        let frame = PlotFrame::default();
        let points = to_plot(&days(&[-1e308, 1e308, 0.0]), &frame);
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys[0], 196.0);
        assert_eq!(ys[1], 24.0);
        assert!((ys[2] - 110.0).abs() < 1e-9);
    }

    #[test]
    fn radius_emphasizes_highlight() {
        assert_eq!(point_radius(2, Some(2)), ACTIVE_POINT_RADIUS);
        assert_eq!(point_radius(1, Some(2)), POINT_RADIUS);
        assert_eq!(point_radius(1, None), POINT_RADIUS);
    }

    #[test]
    fn tooltip_follows_highlight() {
        let frame = PlotFrame::default();
        let points = to_plot(&days(&[1.08, 1.082]), &frame);
        let tip = tooltip(&points, Some(1), &frame).unwrap();
        assert_eq!(tip.date, "2025-07-02");
        assert_eq!(tip.rate, "1.0820");
        assert!((tip.left_percent - 96.25).abs() < 1e-9);
        assert_eq!(tooltip(&points, Some(5), &frame), None);
        assert_eq!(tooltip(&points, None, &frame), None);
    }
}
