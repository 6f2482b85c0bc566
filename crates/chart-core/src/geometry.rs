// File: crates/chart-core/src/geometry.rs
// Summary: Screen-space primitives produced by the materializer (point geometries, bezier segments).

pub use kurbo::{BezPath, PathEl, Point, Rect, Size};

/// Visual geometry drawn at a chart point (a circle by default).
/// `center` is the resolved pixel position of the sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointGeometry {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl PointGeometry {
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self { center, width, height }
    }

    pub const fn square(center: Point, size: f64) -> Self {
        Self::new(center, size, size)
    }

    pub fn x(&self) -> f64 { self.center.x }
    pub fn y(&self) -> f64 { self.center.y }

    /// Bounding box of the geometry.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Size::new(self.width, self.height))
    }
}

/// Cubic segment from the previous chart point to this one.
///
/// `(xi, yi)` and `(xm, ym)` are the control points, `(xj, yj)` is the chart
/// point the segment ends at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BezierSegment {
    pub xi: f64,
    pub yi: f64,
    pub xm: f64,
    pub ym: f64,
    pub xj: f64,
    pub yj: f64,
}

impl BezierSegment {
    /// Degenerate segment collapsed onto `p`.
    pub const fn at(p: Point) -> Self {
        Self { xi: p.x, yi: p.y, xm: p.x, ym: p.y, xj: p.x, yj: p.y }
    }

    pub fn control1(&self) -> Point { Point::new(self.xi, self.yi) }
    pub fn control2(&self) -> Point { Point::new(self.xm, self.ym) }
    pub fn end(&self) -> Point { Point::new(self.xj, self.yj) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_bounds_are_centered() {
        let g = PointGeometry::square(Point::new(10.0, 20.0), 10.0);
        let r = g.bounds();
        assert_eq!(r.x0, 5.0);
        assert_eq!(r.y1, 25.0);
        assert_eq!(r.width(), 10.0);
    }

    #[test]
    fn degenerate_segment_sits_on_its_point() {
        let s = BezierSegment::at(Point::new(3.0, 4.0));
        assert_eq!(s.control1(), s.end());
        assert_eq!(s.control2(), s.end());
    }
}
