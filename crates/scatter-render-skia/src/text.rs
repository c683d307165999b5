// File: crates/scatter-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; left, centred and right-aligned drawing on a baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
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
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, bold).longest_line()
    }

    /// Paragraphs paint from their top-left corner; shift up so `y` is the baseline.
    fn paint_at(&self, canvas: &skia::Canvas, mut p: Paragraph, x: f32, y: f32) {
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (x, y - ascent));
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        self.paint_at(canvas, p, x, y);
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        self.paint_at(canvas, p, cx - w * 0.5, y);
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        let w = p.longest_line();
        self.paint_at(canvas, p, right - w, y);
    }
}
