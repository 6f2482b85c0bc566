// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia backend: a CPU raster surface implementing chart-core's DrawingSurface.

mod text;

pub use text::TextShaper;

use anyhow::Context;
use chart_core::geometry::PathEl;
use chart_core::{BezPath, Color, DrawingSurface, GeometryStyle, Point, PointGeometry, Size, Stroke, TextStyle};
use log::debug;
use skia_safe as skia;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Convert a chart path into a Skia path.
pub fn to_skia_path(path: &BezPath) -> skia::Path {
    let pt = |p: Point| (p.x as f32, p.y as f32);
    let mut out = skia::Path::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => { out.move_to(pt(p)); }
            PathEl::LineTo(p) => { out.line_to(pt(p)); }
            PathEl::QuadTo(p1, p2) => { out.quad_to(pt(p1), pt(p2)); }
            PathEl::CurveTo(p1, p2, p3) => { out.cubic_to(pt(p1), pt(p2), pt(p3)); }
            PathEl::ClosePath => { out.close(); }
        }
    }
    out
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia_color(stroke.color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(color));
    paint
}

/// CPU raster surface charts can draw onto.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn raster(width: i32, height: i32) -> anyhow::Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .with_context(|| format!("failed to create {width}x{height} raster surface"))?;
        debug!("created {width}x{height} raster surface");
        Ok(Self { surface, shaper: TextShaper::new() })
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Color of one pixel of the current frame.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Color> {
        let pixmap = self.surface.peek_pixels()?;
        let c = pixmap.get_color((x, y));
        Some(Color::from_argb(c.a(), c.r(), c.g(), c.b()))
    }
}

impl DrawingSurface for SkiaSurface {
    fn size(&self) -> Size {
        Size::new(self.surface.width() as f64, self.surface.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia_color(color));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke) {
        self.surface.canvas().draw_path(&to_skia_path(path), &stroke_paint(stroke));
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.surface.canvas().draw_path(&to_skia_path(path), &fill_paint(color));
    }

    fn draw_geometry(&mut self, geometry: &PointGeometry, style: &GeometryStyle) {
        let b = geometry.bounds();
        let rect = skia::Rect::from_ltrb(b.x0 as f32, b.y0 as f32, b.x1 as f32, b.y1 as f32);
        let canvas = self.surface.canvas();
        canvas.draw_oval(rect, &fill_paint(style.fill));
        canvas.draw_oval(rect, &stroke_paint(&style.stroke));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.surface.canvas().draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            &stroke_paint(stroke),
        );
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(
            canvas,
            text,
            origin.x as f32,
            origin.y as f32,
            style.size as f32,
            to_skia_color(style.color),
            style.align,
            style.rotation as f32,
        );
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        self.shaper.measure(text, style.size as f32)
    }
}
