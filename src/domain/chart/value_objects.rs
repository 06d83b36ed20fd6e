use derive_more::Constructor;
use serde::Serialize;

use crate::domain::rates::RateDay;

/// Value Object - fixed-size drawing surface the series is scaled into
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self { width: 640.0, height: 220.0, padding: 24.0 }
    }
}

impl PlotFrame {
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// SVG `viewBox` attribute for this frame
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Horizontal position as a percentage of the frame width
    pub fn x_percent(&self, x: f64) -> f64 {
        x / self.width * 100.0
    }
}

/// A day's rate placed inside a [`PlotFrame`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub day: RateDay,
}
