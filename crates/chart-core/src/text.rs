// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored and rotated drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Which horizontal edge of the text sits on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Which vertical edge of the text sits on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Families with Arabic coverage first; the collection falls back per glyph.
        ts.set_font_families(&["DejaVu Sans", "Arial Unicode MS", "Tahoma", "Noto Sans Arabic", "Segoe UI", "Arial", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width of the longest line, total height).
    pub fn measure(&self, text: &str, size: f32, bold: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, bold);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that the edges picked by `h`/`v` touch `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        bold: bool,
        h: HAlign,
        v: VAlign,
    ) {
        let p = self.layout(text, size, color, bold);
        let (w, ht) = (p.longest_line(), p.height());
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Like [`TextShaper::draw`], but rotated `degrees` counter-clockwise around the anchor.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        size: f32,
        color: skia::Color,
        bold: bool,
        degrees: f32,
        h: HAlign,
        v: VAlign,
    ) {
        if degrees == 0.0 {
            self.draw(canvas, text, anchor, size, color, bold, h, v);
            return;
        }
        canvas.save();
        canvas.translate(anchor);
        // Skia rotates clockwise for positive angles (Y points down).
        canvas.rotate(-degrees, None);
        self.draw(canvas, text, (0.0, 0.0), size, color, bold, h, v);
        canvas.restore();
    }
}
