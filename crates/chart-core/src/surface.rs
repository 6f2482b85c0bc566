// File: crates/chart-core/src/surface.rs
// Summary: Drawing-surface abstraction implemented by rendering backends, plus a recording surface.

use crate::geometry::{BezPath, Point, PointGeometry, Size};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// How a point geometry is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryStyle {
    pub fill: Color,
    pub stroke: Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    /// Clockwise rotation in degrees around the origin.
    pub rotation: f64,
}

impl TextStyle {
    pub const fn new(size: f64, color: Color) -> Self {
        Self { size, color, align: TextAlign::Start, rotation: 0.0 }
    }

    pub const fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// What a rendering backend has to provide for charts to paint on it.
///
/// Coordinates are pixels with the origin at the top-left corner. Text is
/// anchored at its baseline; `align` picks which end sits on `origin`.
pub trait DrawingSurface {
    fn size(&self) -> Size;
    fn clear(&mut self, color: Color);
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke);
    fn fill_path(&mut self, path: &BezPath, color: Color);
    fn draw_geometry(&mut self, geometry: &PointGeometry, style: &GeometryStyle);
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;
}

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    StrokePath { path: BezPath, stroke: Stroke },
    FillPath { path: BezPath, color: Color },
    Geometry { geometry: PointGeometry, style: GeometryStyle },
    Line { from: Point, to: Point, stroke: Stroke },
    Text { text: String, origin: Point, style: TextStyle },
}

/// Surface that records commands instead of painting; text metrics are a
/// fixed-advance approximation so layouts are reproducible.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height), commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Take ownership of the recorded commands, clearing the surface.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn geometries(&self) -> impl Iterator<Item = &PointGeometry> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Geometry { geometry, .. } => Some(geometry),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Size { self.size }

    fn clear(&mut self, color: Color) {
        // a clear wipes everything recorded before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), stroke: *stroke });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), color });
    }

    fn draw_geometry(&mut self, geometry: &PointGeometry, style: &GeometryStyle) {
        self.commands.push(DrawCommand::Geometry { geometry: *geometry, style: *style });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke: *stroke });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, style: *style });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        Size::new(text.chars().count() as f64 * style.size * 0.6, style.size)
    }
}
