// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaping through Skia textlayout; measures and paints axis labels.

use chart_core::{Size, TextAlign};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // tabular digits keep separator labels aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line by the paragraph height.
    pub fn measure(&self, text: &str, size: f32) -> Size {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        Size::new(p.longest_line() as f64, p.height() as f64)
    }

    /// Paint `text` with its baseline at `(x, y)`, aligned and rotated (degrees, clockwise) around that point.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: TextAlign, rotation: f32) {
        let mut p = self.layout(text, size, color);
        let dx = match align {
            TextAlign::Start => 0.0,
            TextAlign::Middle => -p.longest_line() * 0.5,
            TextAlign::End => -p.longest_line(),
        };
        canvas.save();
        canvas.translate((x, y));
        if rotation != 0.0 {
            canvas.rotate(rotation, None);
        }
        // paragraphs paint from their top-left corner; shift up by the ascent approximation
        p.paint(canvas, (dx, -size * 0.8));
        canvas.restore();
    }
}
