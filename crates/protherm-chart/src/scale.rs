// File: crates/protherm-chart/src/scale.rs
// Summary: Week-time (X) and temperature (Y) to pixel transforms shared by curve and ticks.
// Notes:
// - Both transforms snap to whole pixels by truncating the scaled distance from the
//   origin edge, so gridlines and curve steps land on the same pixel rows/columns.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Horizontal scale: seconds into the week to pixel column.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub start: f64,
    /// Pixels per second.
    pub spacing: f64,
}

impl TimeScale {
    pub fn new(left_px: i32, width_px: i32, start: f64, end: f64) -> Self {
        let span = (end - start).max(1e-9);
        Self { left_px: left_px as f32, start, spacing: width_px as f64 / span }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        self.left_px + ((x - self.start) * self.spacing).trunc() as f32
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.start + (px - self.left_px) as f64 / self.spacing
    }
}

/// Vertical scale: degrees to pixel row, growing upwards from the plot bottom.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub bottom_px: f32,
    pub vmin: f64,
    /// Pixels per degree.
    pub spacing: f64,
}

impl ValueScale {
    pub fn new(bottom_px: i32, height_px: i32, vmin: f64, vmax: f64) -> Self {
        let span = (vmax - vmin).max(1e-9);
        Self { bottom_px: bottom_px as f32, vmin, spacing: height_px as f64 / span }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        self.bottom_px - ((y - self.vmin) * self.spacing).trunc() as f32
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        self.vmin + (self.bottom_px - py) as f64 / self.spacing
    }
}

/// Combined mapper for one plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub plot: RectI32,
    pub x: TimeScale,
    pub y: ValueScale,
}

impl PlotScale {
    pub fn new(plot: RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            plot,
            x: TimeScale::new(plot.left, plot.width(), x_axis.min, x_axis.max),
            y: ValueScale::new(plot.bottom, plot.height(), y_axis.min, y_axis.max),
        }
    }

    /// (seconds into week, degrees) to pixel coordinates.
    #[inline]
    pub fn to_px(&self, seconds: f64, degrees: f64) -> (f32, f32) {
        (self.x.to_px(seconds), self.y.to_px(degrees))
    }

    pub fn left(&self) -> f32 { self.plot.left as f32 }
    pub fn right(&self) -> f32 { self.plot.right as f32 }
    pub fn top(&self) -> f32 { self.plot.top as f32 }
    pub fn bottom(&self) -> f32 { self.plot.bottom as f32 }
}
