// File: crates/protherm-chart/src/text.rs
// Summary: Text shaping and measured placement using Skia textlayout, with optional font files.

use std::path::Path;

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle, TypefaceFontProvider,
};
use tracing::{debug, warn};

use crate::config::FontConfig;

const TICS_ALIAS: &str = "protherm-tics";
const LABEL_BOLD_ALIAS: &str = "protherm-label-bold";
const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans", "sans-serif"];

/// Which font and size a piece of text uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// Axis value labels.
    Tics,
    /// Title and legends.
    LabelBold,
}

pub struct TextShaper {
    fonts: FontCollection,
    tics_size: f32,
    label_size: f32,
}

impl TextShaper {
    pub fn new(config: &FontConfig) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);

        let mut provider = TypefaceFontProvider::new();
        let mut registered = 0;
        for (path, alias) in [
            (&config.tics_font, TICS_ALIAS),
            (&config.label_font_bold, LABEL_BOLD_ALIAS),
        ] {
            if let Some(typeface) = path.as_deref().and_then(load_typeface) {
                provider.register_typeface(typeface, Some(alias));
                registered += 1;
            }
        }
        if registered > 0 {
            let mgr: skia::FontMgr = provider.into();
            fc.set_asset_font_manager(Some(mgr));
        }
        debug!(registered, "text shaper ready");

        Self { fonts: fc, tics_size: config.tics_size.max(1.0), label_size: config.label_size.max(1.0) }
    }

    fn make_style(&self, role: TextRole, color: skia::Color) -> TextStyle {
        let (alias, size) = match role {
            TextRole::Tics => (TICS_ALIAS, self.tics_size),
            TextRole::LabelBold => (LABEL_BOLD_ALIAS, self.label_size),
        };
        let mut ts = TextStyle::new();
        ts.set_font_size(size);
        ts.set_color(color);
        let mut families = vec![alias];
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(&families[..]);
        if role == TextRole::LabelBold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text` with every line centred on the widest one.
    pub fn layout(&self, text: &str, role: TextRole, color: skia::Color) -> Paragraph {
        let build = |align: TextAlign, width: f32| {
            let mut pstyle = ParagraphStyle::new();
            pstyle.set_text_align(align);
            let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
            builder.push_style(&self.make_style(role, color));
            builder.add_text(text);
            let mut paragraph = builder.build();
            paragraph.layout(width);
            paragraph
        };
        let probe = build(TextAlign::Left, 10_000.0);
        if !text.contains('\n') {
            return probe;
        }
        build(TextAlign::Center, probe.longest_line().ceil())
    }

    /// Rendered extents `(width, height)` of `text`.
    pub fn measure(&self, text: &str, role: TextRole) -> (f32, f32) {
        let p = self.layout(text, role, skia::Color::from_argb(0, 0, 0, 0));
        (p.longest_line(), p.height())
    }

    /// Paint with the text box's top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, role: TextRole, color: skia::Color) {
        let mut p = self.layout(text, role, color);
        p.paint(canvas, (x, y));
    }

    /// Paint rotated 90 degrees counter-clockwise (reading bottom to top), centred on `(cx, cy)`.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, role: TextRole, color: skia::Color) {
        let mut p = self.layout(text, role, color);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w / 2.0, -h / 2.0));
        canvas.restore();
    }
}

fn load_typeface(path: &Path) -> Option<skia::Typeface> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read font file; using system fonts");
            return None;
        }
    };
    let typeface = skia::FontMgr::default().new_from_data(&bytes, None);
    if typeface.is_none() {
        warn!(path = %path.display(), "unsupported font file; using system fonts");
    }
    typeface
}
