// File: crates/protherm-chart/src/axis.rs
// Summary: Axis model (label, range, tick steps) and the temperature range estimator.

use tracing::debug;

use crate::config::ChartConfig;
use crate::program::Program;

/// Space left below the lowest set-point, in degrees.
pub const AUTORANGE_BELOW: f64 = 3.0;
/// Space left above the highest set-point, in degrees.
pub const AUTORANGE_ABOVE: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Major tick spacing.
    pub step: f64,
    /// Minor tick spacing, if the axis has minor ticks.
    pub minor_step: Option<f64>,
    /// Offset of the first major tick from `min`.
    pub offset: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, step: 1.0, minor_step: None, offset: 0.0 }
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// One week of seconds, major ticks at `x_tics_offset + k * x_tics_step`, minor every `x_mtics_step`.
    pub fn week(config: &ChartConfig) -> Self {
        let (min, max) = config.x_range();
        Self {
            label: config.x_legend.clone(),
            min,
            max,
            step: config.x_tics_step as f64,
            minor_step: Some(config.x_mtics_step as f64),
            offset: config.x_tics_offset as f64,
        }
    }

    /// Temperature axis for `program`, autoranged per `config`.
    pub fn temperature(program: &Program, config: &ChartConfig) -> Self {
        let (min, max) = estimate_y_range(program.min_value(), program.max_value(), config);
        Self {
            label: config.y_legend.clone(),
            min,
            max,
            step: config.y_tics_step,
            minor_step: None,
            offset: 0.0,
        }
    }
}

/// Vertical bounds for the observed set-point extremes.
///
/// With autorange on and samples present: `floor(min - 3)` and `floor(max + 2)`.
/// Otherwise the configured fixed range. A collapsed range is widened by one degree.
pub fn estimate_y_range(min: Option<f64>, max: Option<f64>, config: &ChartConfig) -> (f64, f64) {
    let mut y_min = config.y_min;
    let mut y_max = config.y_max;
    if config.y_autorange {
        if let Some(v) = min { y_min = (v - AUTORANGE_BELOW).floor(); }
        if let Some(v) = max { y_max = (v + AUTORANGE_ABOVE).floor(); }
        // e.g. a set-point with hundreds of digits parses to infinity
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = config.y_min;
            y_max = config.y_max;
        }
    }
    if !(y_max > y_min) {
        y_max = y_min + 1.0;
    }
    debug!(y_min, y_max, autorange = config.y_autorange, "temperature range");
    (y_min, y_max)
}
