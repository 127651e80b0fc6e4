// File: crates/protherm-chart/src/chart.rs
// Summary: Program chart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::curve::StepCurve;
use crate::error::{LibraryError, RenderError};
use crate::geometry::RectI32;
use crate::grid::{x_major_ticks, x_minor_ticks, y_ticks, Tick, TickKind};
use crate::library::ProgramLibrary;
use crate::program::Program;
use crate::scale::PlotScale;
use crate::text::{TextRole, TextShaper};
use crate::theme::Theme;
use crate::types::TickLengths;

/// Dash pattern for gridlines: 2 px on, 3 px off.
const GRID_DASH: [f32; 2] = [2.0, 3.0];

/// Encoded chart image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedImage {
    pub const CONTENT_TYPE: &'static str = "image/png";

    pub fn content_type(&self) -> &'static str { Self::CONTENT_TYPE }
}

/// Everything the renderer draws, resolved to pixels. Pure function of program and config.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub plot: RectI32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub scale: PlotScale,
    pub curve: StepCurve,
    pub y_ticks: Vec<Tick>,
    pub x_major: Vec<Tick>,
    pub x_minor: Vec<Tick>,
    pub tick_len: TickLengths,
}

/// A named weekly program ready to be drawn.
pub struct ProgramChart {
    pub name: String,
    pub program: Program,
}

impl ProgramChart {
    pub fn new(name: impl Into<String>, program: Program) -> Self {
        Self { name: name.into(), program }
    }

    /// Look up `identifier` in `library`. An unreadable program file renders as an empty chart;
    /// only an unusable identifier is an error.
    pub fn from_library(library: &ProgramLibrary, identifier: &str) -> Result<Self, LibraryError> {
        let (name, path) = library.resolve(identifier)?;
        Ok(Self::new(name, Program::load_or_empty(path)))
    }

    pub fn title(&self, config: &ChartConfig) -> String {
        format!("{} {}", config.title_prefix, self.name)
    }

    pub fn layout(&self, config: &ChartConfig) -> ChartLayout {
        let plot = RectI32::inset(config.width, config.height, &config.insets());
        let x_axis = Axis::week(config);
        let y_axis = Axis::temperature(&self.program, config);
        let scale = PlotScale::new(plot, &x_axis, &y_axis);
        let curve = StepCurve::build(&self.program, &scale);
        ChartLayout {
            y_ticks: y_ticks(&y_axis, &scale),
            x_major: x_major_ticks(&x_axis, &scale),
            x_minor: x_minor_ticks(&x_axis, &scale),
            plot,
            x_axis,
            y_axis,
            scale,
            curve,
            tick_len: config.tick_lengths(),
        }
    }

    /// Render into an RGBA8 (unpremultiplied) buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, config: &ChartConfig) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let config = config.clone().sanitized();
        let (width, height) = (config.width, config.height);

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let layout = self.layout(&config);
        let theme = config.theme();
        {
            let canvas = surface.canvas();
            canvas.clear(theme.background);
            draw_curve(canvas, &layout, &theme);
            draw_ticks(canvas, &layout, &theme);
            draw_border(canvas, &layout.plot, &theme);
            if config.draw_labels {
                let shaper = TextShaper::new(&config.fonts);
                draw_tick_labels(canvas, &shaper, &layout, &theme);
                draw_legends(canvas, &shaper, &self.title(&config), &config, &theme);
            }
        }

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        debug!(width, height, points = self.program.len(), "rasterized program chart");
        Ok((pixels, width as u32, height as u32, stride))
    }

    /// Render and encode as PNG.
    pub fn render(&self, config: &ChartConfig) -> Result<RenderedImage, RenderError> {
        let (pixels, width, height, _) = self.render_to_rgba8(config)?;
        let buffer = image::RgbaImage::from_raw(width, height, pixels).ok_or(RenderError::ReadPixels)?;
        let mut bytes = Vec::new();
        buffer.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        info!(program = %self.name, bytes = bytes.len(), "rendered program chart");
        Ok(RenderedImage { bytes, width, height })
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, config: &ChartConfig, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let rendered = self.render(config)?;
        if let Some(parent) = output_png_path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, &rendered.bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint
}

fn dashed(color: skia::Color) -> skia::Paint {
    let mut paint = stroke(color);
    paint.set_path_effect(skia::PathEffect::dash(&GRID_DASH, 0.0));
    paint
}

/// One-pixel line between pixel centres, so integer coordinates land on whole pixels.
fn line(canvas: &skia::Canvas, (x0, y0): (f32, f32), (x1, y1): (f32, f32), paint: &skia::Paint) {
    canvas.draw_line((x0 + 0.5, y0 + 0.5), (x1 + 0.5, y1 + 0.5), paint);
}

fn draw_curve(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    // pixel centres, matching `line`
    let offset = (0.5, 0.5);

    if layout.curve.has_fill() {
        let mut fill = skia::Paint::default();
        fill.set_color(theme.fill);
        fill.set_anti_alias(false);
        fill.set_style(skia::paint::Style::Fill);
        let p = &layout.plot;
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(p.left as f32, p.top as f32, p.right as f32 + 1.0, p.bottom as f32 + 1.0),
            None,
            false,
        );
        canvas.draw_path(&layout.curve.fill_path(offset), &fill);
        canvas.restore();
    }
    canvas.draw_path(&layout.curve.to_path(offset), &stroke(theme.outline));
}

fn draw_ticks(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let solid = stroke(theme.stroke_solid);
    let grid = dashed(theme.stroke_light);
    let p = &layout.plot;
    let (l, r, t, b) = (p.left as f32, p.right as f32, p.top as f32, p.bottom as f32);
    let ytl = layout.tick_len.y as f32;

    for tick in &layout.y_ticks {
        let y = tick.px;
        line(canvas, (l - ytl, y), (l, y), &solid);
        line(canvas, (l, y), (r, y), &grid);
        line(canvas, (r, y), (r + ytl, y), &solid);
    }

    for tick in layout.x_major.iter().chain(&layout.x_minor) {
        let len = match tick.kind {
            TickKind::Major => layout.tick_len.x,
            TickKind::Minor => layout.tick_len.x / 2,
        } as f32;
        let x = tick.px;
        line(canvas, (x, t - len), (x, t), &solid);
        line(canvas, (x, t), (x, b), &grid);
        line(canvas, (x, b + len), (x, b), &solid);
    }
}

fn draw_border(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let rect = skia::Rect::from_ltrb(
        plot.left as f32 + 0.5,
        plot.top as f32 + 0.5,
        plot.right as f32 + 0.5,
        plot.bottom as f32 + 0.5,
    );
    canvas.draw_rect(rect, &stroke(theme.stroke_solid));
}

fn draw_tick_labels(canvas: &skia::Canvas, shaper: &TextShaper, layout: &ChartLayout, theme: &Theme) {
    let color = theme.stroke_solid;
    let left = layout.plot.left as f32;
    let ytl = layout.tick_len.y as f32;
    for tick in &layout.y_ticks {
        let (w, h) = shaper.measure(&tick.label, TextRole::Tics);
        shaper.draw(canvas, &tick.label, left - ytl * 1.5 - w, tick.px - h / 2.0, TextRole::Tics, color);
    }

    let top = layout.plot.bottom as f32 + layout.tick_len.x as f32 * 1.5;
    for tick in layout.x_major.iter().chain(&layout.x_minor) {
        let (w, _) = shaper.measure(&tick.label, TextRole::Tics);
        shaper.draw(canvas, &tick.label, tick.px - (w / 2.0).trunc(), top, TextRole::Tics, color);
    }
}

fn draw_legends(canvas: &skia::Canvas, shaper: &TextShaper, title: &str, config: &ChartConfig, theme: &Theme) {
    let color = theme.stroke_solid;
    let width = config.width as f32;
    let height = config.height as f32;
    let margin = config.label_margin;

    let (w, h) = shaper.measure(title, TextRole::LabelBold);
    shaper.draw(canvas, title, ((width - w) / 2.0).trunc(), (h * margin).trunc(), TextRole::LabelBold, color);

    let (w, h) = shaper.measure(&config.x_legend, TextRole::LabelBold);
    shaper.draw(
        canvas,
        &config.x_legend,
        ((width - w) / 2.0).trunc(),
        (height - h * (1.0 + margin)).trunc(),
        TextRole::LabelBold,
        color,
    );

    // Rotated: the text height becomes its horizontal extent.
    let (_, h) = shaper.measure(&config.y_legend, TextRole::LabelBold);
    shaper.draw_rotated(canvas, &config.y_legend, h * (0.5 + margin), height / 2.0, TextRole::LabelBold, color);
}
