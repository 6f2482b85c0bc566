// File: crates/chart-core/src/bezier.rs
// Summary: Smoothed cubic segments through chart points and path assembly.

use crate::geometry::{BezPath, BezierSegment, Point};

/// Segment from `p1` to `p2`, shaped by the neighbours `p0` and `p3`.
///
/// Control points come from the mid-points of the neighbouring chords,
/// weighted by chord length. `smoothness` 0 gives a straight line, 1 the
/// fully smoothed curve.
pub fn spline(p0: Point, p1: Point, p2: Point, p3: Point, smoothness: f64) -> BezierSegment {
    let s = smoothness.clamp(0.0, 1.0);

    let c1 = p0.midpoint(p1);
    let c2 = p1.midpoint(p2);
    let c3 = p2.midpoint(p3);

    let len1 = p0.distance(p1);
    let len2 = p1.distance(p2);
    let len3 = p2.distance(p3);

    let k1 = ratio(len1, len1 + len2);
    let k2 = ratio(len2, len2 + len3);

    let m1 = c1.lerp(c2, k1);
    let m2 = c2.lerp(c3, k2);

    BezierSegment {
        xi: m1.x + (c2.x - m1.x) * s + p1.x - m1.x,
        yi: m1.y + (c2.y - m1.y) * s + p1.y - m1.y,
        xm: m2.x + (c2.x - m2.x) * s + p2.x - m2.x,
        ym: m2.y + (c2.y - m2.y) * s + p2.y - m2.y,
        xj: p2.x,
        yj: p2.y,
    }
}

#[inline]
fn ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 { a / b } else { 0.0 }
}

/// One segment per point; segment `i` ends at `points[i]`.
///
/// Open paths start with a degenerate segment at the first point. Closed paths
/// wrap their neighbours, so segment 0 runs from the last point back to the first.
pub fn segments(points: &[Point], smoothness: f64, closed: bool) -> Vec<BezierSegment> {
    let n = points.len();
    if n == 0 { return Vec::new(); }
    if n == 1 { return vec![BezierSegment::at(points[0])]; }

    (0..n)
        .map(|i| {
            if closed {
                let p0 = points[(i + n - 2) % n];
                let p1 = points[(i + n - 1) % n];
                let p3 = points[(i + 1) % n];
                spline(p0, p1, points[i], p3, smoothness)
            } else if i == 0 {
                BezierSegment::at(points[0])
            } else {
                let p0 = points[i.saturating_sub(2)];
                let p3 = points[(i + 1).min(n - 1)];
                spline(p0, points[i - 1], points[i], p3, smoothness)
            }
        })
        .collect()
}

/// Stroke path through the segments; closed paths end with segment 0.
pub fn path_from_segments(segments: &[BezierSegment], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = segments.first() else { return path };
    path.move_to(first.end());
    for s in &segments[1..] {
        path.curve_to(s.control1(), s.control2(), s.end());
    }
    if closed && segments.len() > 1 {
        path.curve_to(first.control1(), first.control2(), first.end());
        path.close_path();
    }
    path
}

/// Continue `path` backwards along `segments`, from the last point to the first.
pub fn append_reversed(path: &mut BezPath, segments: &[BezierSegment]) {
    let Some(last) = segments.last() else { return };
    path.line_to(last.end());
    for i in (1..segments.len()).rev() {
        let s = &segments[i];
        path.curve_to(s.control2(), s.control1(), segments[i - 1].end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn zero_smoothness_is_straight() {
        let s = spline(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0), Point::new(3.0, 1.0), 0.0);
        assert_eq!(s.control1(), Point::new(1.0, 1.0));
        assert_eq!(s.control2(), Point::new(2.0, 0.0));
        assert_eq!(s.end(), Point::new(2.0, 0.0));
    }

    #[test]
    fn collinear_points_keep_controls_on_the_line() {
        let s = spline(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0), 1.0);
        assert!((s.xi - s.yi).abs() < 1e-12);
        assert!((s.xm - s.ym).abs() < 1e-12);
        assert!(s.xi > 1.0 && s.xm < 2.0);
    }

    #[test]
    fn coincident_points_do_not_produce_nan() {
        let p = Point::new(5.0, 5.0);
        let s = spline(p, p, p, p, 0.65);
        assert_eq!(s, BezierSegment::at(p));
    }

    #[test]
    fn open_segments_end_at_each_point() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0)]);
        let segs = segments(&points, 0.65, false);
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], BezierSegment::at(points[0]));
        for (s, p) in segs.iter().zip(&points) {
            assert_eq!(s.end(), *p);
        }
    }

    #[test]
    fn closed_segments_wrap() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let segs = segments(&points, 0.0, true);
        // segment 0 comes from the last point
        assert!(segs[0].control1().distance(points[2]) < 1e-9);
        let path = path_from_segments(&segs, true);
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
        assert_eq!(path.elements().len(), 5);
    }

    #[test]
    fn reversed_path_walks_back_to_first_point() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let segs = segments(&points, 0.5, false);
        let mut path = BezPath::new();
        path.move_to(Point::new(9.0, 9.0));
        append_reversed(&mut path, &segs);
        match path.elements().last() {
            Some(PathEl::CurveTo(_, _, end)) => assert_eq!(*end, points[0]),
            other => panic!("unexpected element {other:?}"),
        }
    }
}
