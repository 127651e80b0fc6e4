// File: crates/protherm-chart/src/lib.rs
// Summary: Core library entry point; weekly temperature program parsing and chart rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod library;
pub mod program;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;
pub mod week;

pub use axis::{estimate_y_range, Axis};
pub use chart::{ChartLayout, ProgramChart, RenderedImage};
pub use config::{ChartConfig, FontConfig};
pub use curve::StepCurve;
pub use error::{LibraryError, ProgramError, RenderError};
pub use library::{sanitize_identifier, ProgramLibrary, DEFAULT_LIB_DIR};
pub use program::Program;
pub use scale::PlotScale;
pub use text::TextShaper;
pub use theme::Theme;
pub use week::WeekTime;
