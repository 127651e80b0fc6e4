// File: crates/protherm-chart/src/config.rs
// Summary: Render configuration; every knob of the chart in one struct, loadable from TOML.

use std::path::PathBuf;

use serde::Deserialize;

use crate::theme::{self, Theme};
use crate::types::{Insets, TickLengths, HEIGHT, WIDTH};
use crate::week::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_WEEK};

/// Font files and sizes. A missing path falls back to system sans-serif families.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub tics_font: Option<PathBuf>,
    pub label_font_bold: Option<PathBuf>,
    pub tics_size: f32,
    pub label_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            tics_font: None,
            label_font_bold: None,
            tics_size: 11.0,
            label_size: 14.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,

    /// Fixed temperature range, used when autorange is off or the program is empty.
    pub y_min: f64,
    pub y_max: f64,
    pub y_autorange: bool,
    pub y_tics_step: f64,

    /// Major time tick spacing and its offset from Monday 00:00, in seconds.
    pub x_tics_step: u32,
    pub x_tics_offset: u32,
    /// Minor time tick spacing, in seconds.
    pub x_mtics_step: u32,

    pub fonts: FontConfig,
    /// Gap between the surface border and title/legends, as a fraction of text height.
    pub label_margin: f32,

    pub theme: String,
    pub title_prefix: String,
    pub x_legend: String,
    pub y_legend: String,
    /// Disable all text (tick labels, title, legends); used for deterministic output.
    pub draw_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            y_min: 12.0,
            y_max: 23.0,
            y_autorange: true,
            y_tics_step: 1.0,
            x_tics_step: SECONDS_PER_DAY,
            x_tics_offset: 12 * SECONDS_PER_HOUR,
            x_mtics_step: 6 * SECONDS_PER_HOUR,
            fonts: FontConfig::default(),
            label_margin: 0.8,
            theme: "classic".to_string(),
            title_prefix: "Temperature Program".to_string(),
            x_legend: "Time".to_string(),
            y_legend: "°C".to_string(),
            draw_labels: true,
        }
    }
}

impl ChartConfig {
    /// Plot margins derived from the surface size.
    pub fn insets(&self) -> Insets { Insets::proportional(self.width, self.height) }

    pub fn tick_lengths(&self) -> TickLengths { TickLengths::proportional(self.width, self.height) }

    pub fn theme(&self) -> Theme { theme::find(&self.theme) }

    /// Horizontal range: always one full week.
    pub fn x_range(&self) -> (f64, f64) { (0.0, SECONDS_PER_WEEK as f64) }

    /// Clamp values that would make the layout loops degenerate.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width <= 0 { self.width = defaults.width; }
        if self.height <= 0 { self.height = defaults.height; }
        if !(self.y_tics_step > 0.0) { self.y_tics_step = defaults.y_tics_step; }
        if self.x_tics_step == 0 { self.x_tics_step = defaults.x_tics_step; }
        if self.x_mtics_step == 0 { self.x_mtics_step = defaults.x_mtics_step; }
        if self.x_tics_offset >= self.x_tics_step { self.x_tics_offset %= self.x_tics_step; }
        if !(self.y_max > self.y_min) || !self.y_min.is_finite() || !self.y_max.is_finite() {
            self.y_min = defaults.y_min;
            self.y_max = defaults.y_max;
        }
        self
    }
}
