// File: crates/plot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and places labels by their box.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::geometry::RectF;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Bitstream Vera Sans", "Arial", "Helvetica", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// `(width, height)` of the laid out text box.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw with the box's top-left corner at `(x, y)`; returns the covered box.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) -> RectF {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
        RectF::from_xywh(x, y, p.longest_line(), p.height())
    }

    /// Draw rotated 90° counter-clockwise, centred on `(cx, cy)`; returns the covered box.
    pub fn draw_rotated_ccw(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) -> RectF {
        let mut p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
        RectF::from_xywh(cx - h * 0.5, cy - w * 0.5, h, w)
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
