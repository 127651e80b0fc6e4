// File: crates/protherm-chart/src/theme.rs
// Summary: Color themes for the program chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Step curve outline.
    pub outline: skia::Color,
    /// Area under the step curve.
    pub fill: skia::Color,
    /// Borders, tick marks and text.
    pub stroke_solid: skia::Color,
    /// Dashed gridlines.
    pub stroke_light: skia::Color,
}

impl Theme {
    /// White background with an orange program area.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            outline: skia::Color::from_argb(255, 151, 42, 0),
            fill: skia::Color::from_argb(255, 255, 71, 0),
            stroke_solid: skia::Color::from_argb(255, 0, 0, 0),
            stroke_light: skia::Color::from_argb(255, 160, 160, 160),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            outline: skia::Color::from_argb(255, 255, 140, 60),
            fill: skia::Color::from_argb(255, 170, 60, 10),
            stroke_solid: skia::Color::from_argb(255, 235, 235, 245),
            stroke_light: skia::Color::from_argb(255, 90, 90, 100),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            outline: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            fill: skia::Color::from_argb(255, 0x00, 0x55, 0xff),
            stroke_solid: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            stroke_light: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
