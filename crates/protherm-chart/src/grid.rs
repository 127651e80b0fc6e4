// File: crates/protherm-chart/src/grid.rs
// Summary: Tick/gridline layout for the temperature and week axes.

use crate::axis::Axis;
use crate::scale::PlotScale;
use crate::week::{format_time, format_time_with_day};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub kind: TickKind,
    /// Domain value (degrees or seconds into the week).
    pub value: f64,
    /// Pixel row (Y axis) or column (X axis).
    pub px: f32,
    pub label: String,
}

/// `start, start + step, ...` up to and including `end`. Empty when `end < start`.
pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(end >= start) { return Vec::new(); }
    if !(step > 0.0) { return vec![start]; }
    // saturating cast: an infinite quotient still stops at the cap
    let n = (((end - start) / step + 1e-9).floor() as usize).min(MAX_TICKS - 1);
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Hard ceiling on ticks per axis, whatever the step.
pub const MAX_TICKS: usize = 4096;

/// `step` widened by the smallest whole factor that leaves at most `limit` ticks in `[start, end]`.
pub fn fit_step(start: f64, end: f64, step: f64, limit: usize) -> f64 {
    let limit = limit.clamp(1, MAX_TICKS) as f64;
    let intervals = (end - start) / step;
    if intervals.is_finite() && intervals + 1.0 > limit {
        // one slot of headroom for the rounding slack in `stepped`
        step * ((intervals + 1.0) / (limit - 1.0).max(1.0)).ceil()
    } else {
        step
    }
}

/// Ticks closer than this many pixels are thinned out.
const MIN_TICK_SPACING_PX: i32 = 2;

fn tick_limit(extent_px: i32) -> usize {
    (extent_px / MIN_TICK_SPACING_PX).max(1) as usize + 1
}

/// One tick per `y_axis.step` from min to max inclusive, labelled with the whole degree.
/// The step is widened when the range would put ticks closer than two pixels apart.
pub fn y_ticks(y_axis: &Axis, scale: &PlotScale) -> Vec<Tick> {
    let limit = tick_limit(scale.plot.height());
    let step = fit_step(y_axis.min, y_axis.max, y_axis.step, limit);
    stepped(y_axis.min, y_axis.max, step)
        .into_iter()
        .map(|v| Tick {
            kind: TickKind::Major,
            value: v,
            px: scale.y.to_px(v),
            label: format!("{}", v.trunc() as i64),
        })
        .collect()
}

/// Daily ticks at `offset + k * step`, labelled `"HH:MM\nDay"`.
pub fn x_major_ticks(x_axis: &Axis, scale: &PlotScale) -> Vec<Tick> {
    let start = x_axis.min + x_axis.offset;
    let step = fit_step(start, x_axis.max, x_axis.step, tick_limit(scale.plot.width()));
    stepped(start, x_axis.max, step)
        .into_iter()
        .map(|v| Tick {
            kind: TickKind::Major,
            value: v,
            px: scale.x.to_px(v),
            label: format_time_with_day(v as u32),
        })
        .collect()
}

/// Minor ticks every `minor_step`, skipping positions already taken by a major tick.
pub fn x_minor_ticks(x_axis: &Axis, scale: &PlotScale) -> Vec<Tick> {
    let Some(minor) = x_axis.minor_step else { return Vec::new() };
    let first_major = x_axis.min + x_axis.offset;
    let limit = tick_limit(scale.plot.width());
    let major = fit_step(first_major, x_axis.max, x_axis.step, limit);
    let minor = fit_step(x_axis.min, x_axis.max, minor, limit);
    let on_major = |v: f64| {
        v >= first_major && ((v - first_major) % major).abs() < 1e-6
    };
    stepped(x_axis.min, x_axis.max, minor)
        .into_iter()
        .filter(|&v| !on_major(v))
        .map(|v| Tick {
            kind: TickKind::Minor,
            value: v,
            px: scale.x.to_px(v),
            label: format_time(v as u32),
        })
        .collect()
}
