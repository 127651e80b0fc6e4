// File: crates/protherm-chart/src/types.rs
// Summary: Shared canvas constants and the geometry derived from the surface size.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins between the surface border and the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins as fixed fractions of the surface: 5 % left, 3 % right, 12 % top, 20 % bottom.
    /// The bottom band holds the two-line time labels and the x legend.
    pub fn proportional(width: i32, height: i32) -> Self {
        let w = width.max(0) as f64;
        let h = height.max(0) as f64;
        Self::new((w * 0.05) as u32, (w * 0.03) as u32, (h * 0.12) as u32, (h * 0.20) as u32)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::proportional(WIDTH, HEIGHT)
    }
}

/// Tick mark lengths in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickLengths {
    /// Vertical marks on the time axis (major length; minor marks are half).
    pub x: i32,
    /// Horizontal marks on the temperature axis.
    pub y: i32,
}

impl TickLengths {
    pub fn proportional(width: i32, height: i32) -> Self {
        Self { x: (height as f64 * 0.0240) as i32, y: (width as f64 * 0.0035) as i32 }
    }
}
