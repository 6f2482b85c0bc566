// File: crates/chart-core/src/scale.rs
// Summary: Scale mappers from data space to draw-margin pixels (cartesian and polar).

use crate::axis::{Axis, ScaleKind};
use crate::bounds::Bounds;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Size};

/// Which screen direction an axis maps onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    X,
    Y,
}

/// Limits in the scale's domain (log10 applied for log scales).
fn domain(bounds: Bounds, kind: ScaleKind) -> Result<(f64, f64)> {
    let bounds = bounds.non_degenerate();
    match kind {
        ScaleKind::Linear => Ok((bounds.min, bounds.max)),
        ScaleKind::Log10 => {
            if bounds.min <= 0.0 || bounds.max <= 0.0 {
                return Err(ChartError::NonPositiveLogBound { min: bounds.min, max: bounds.max });
            }
            let (lo, hi) = (bounds.min.log10(), bounds.max.log10());
            Ok(if (hi - lo).abs() < 1e-12 { (lo, lo + 1.0) } else { (lo, hi) })
        }
    }
}

#[inline]
fn to_domain(kind: ScaleKind, v: f64) -> f64 {
    match kind {
        ScaleKind::Linear => v,
        ScaleKind::Log10 => v.max(1e-300).log10(),
    }
}

/// Maps a data-space range onto a pixel range of the draw margin.
///
/// Differences are taken between halved values so limits further apart than
/// `f64::MAX` still map to finite pixels.
#[derive(Clone, Copy, Debug)]
pub struct Scaler {
    min_px: f64,
    max_px: f64,
    min_val: f64,
    kind: ScaleKind,
    // pixels per data unit (per decade on log scales), signed
    m: f64,
}

impl Scaler {
    pub fn new(
        location: Point,
        size: Size,
        orientation: Orientation,
        bounds: Bounds,
        kind: ScaleKind,
        inverted: bool,
    ) -> Result<Self> {
        let (min_val, max_val) = domain(bounds, kind)?;

        // Data grows rightwards on X and upwards on Y.
        let (mut min_px, mut max_px) = match orientation {
            Orientation::X => (location.x, location.x + size.width),
            Orientation::Y => (location.y + size.height, location.y),
        };
        if inverted {
            std::mem::swap(&mut min_px, &mut max_px);
        }

        let m = (max_px - min_px) / (max_val / 2.0 - min_val / 2.0) * 0.5;
        Ok(Self { min_px, max_px, min_val, kind, m })
    }

    /// Pixel position of a data value.
    #[inline]
    pub fn to_pixels(&self, value: f64) -> f64 {
        self.min_px + (to_domain(self.kind, value) / 2.0 - self.min_val / 2.0) * self.m * 2.0
    }

    /// Data value at a pixel position; inverse of `to_pixels`.
    pub fn to_chart_values(&self, px: f64) -> f64 {
        let v = (self.min_val / 2.0 + (px - self.min_px) / self.m / 2.0) * 2.0;
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => 10f64.powf(v),
        }
    }

    /// Absolute pixel length of a data-space distance (linear scales).
    pub fn measure_in_pixels(&self, delta: f64) -> f64 {
        (delta * self.m).abs()
    }

    /// Pixel clamped into the scaler's range.
    pub fn clamp_pixels(&self, px: f64) -> f64 {
        let (lo, hi) = if self.min_px <= self.max_px { (self.min_px, self.max_px) } else { (self.max_px, self.min_px) };
        px.clamp(lo, hi)
    }
}

/// One polar dimension: resolved limits plus the axis' scale kind and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarRange {
    pub limits: Bounds,
    pub kind: ScaleKind,
    pub inverted: bool,
}

impl PolarRange {
    pub const fn linear(limits: Bounds) -> Self {
        Self { limits, kind: ScaleKind::Linear, inverted: false }
    }

    pub fn of(axis: &Axis, limits: Bounds) -> Self {
        Self { limits, kind: axis.kind, inverted: axis.inverted }
    }
}

#[derive(Clone, Copy, Debug)]
struct Span {
    min: f64,
    max: f64,
    kind: ScaleKind,
    inverted: bool,
}

impl Span {
    fn new(range: PolarRange) -> Result<Self> {
        let (min, max) = domain(range.limits, range.kind)?;
        Ok(Self { min, max, kind: range.kind, inverted: range.inverted })
    }

    /// 0 at the minimum, 1 at the maximum; reversed when inverted.
    fn fraction(&self, v: f64) -> f64 {
        let f = (to_domain(self.kind, v) / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0);
        if self.inverted { 1.0 - f } else { f }
    }
}

/// Maps `(angle value, radius value)` pairs onto the draw margin.
#[derive(Clone, Copy, Debug)]
pub struct PolarScaler {
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    angle: Span,
    radius: Span,
    initial_rotation: f64,
    total_angle: f64,
}

impl PolarScaler {
    pub fn new(
        location: Point,
        size: Size,
        angle: PolarRange,
        radius: PolarRange,
        inner_radius: f64,
        initial_rotation: f64,
        total_angle: f64,
    ) -> Result<Self> {
        let center = Point::new(location.x + size.width * 0.5, location.y + size.height * 0.5);
        let outer_radius = size.width.min(size.height) * 0.5;
        Ok(Self {
            center,
            inner_radius: inner_radius.clamp(0.0, outer_radius),
            outer_radius,
            angle: Span::new(angle)?,
            radius: Span::new(radius)?,
            initial_rotation,
            total_angle,
        })
    }

    pub fn center(&self) -> Point { self.center }
    pub fn inner_radius(&self) -> f64 { self.inner_radius }
    pub fn outer_radius(&self) -> f64 { self.outer_radius }

    /// Screen angle in degrees for an angle-axis value.
    pub fn to_degrees(&self, angle_value: f64) -> f64 {
        self.initial_rotation + self.angle.fraction(angle_value) * self.total_angle
    }

    /// Pixel distance from the center for a radius-axis value.
    pub fn to_radius(&self, radius_value: f64) -> f64 {
        self.inner_radius + self.radius.fraction(radius_value) * (self.outer_radius - self.inner_radius)
    }

    pub fn to_pixels(&self, angle_value: f64, radius_value: f64) -> Point {
        self.point_at(self.to_degrees(angle_value), self.to_radius(radius_value))
    }

    /// Screen point at `degrees` (0 points right, clockwise) and pixel radius `r`.
    pub fn point_at(&self, degrees: f64, r: f64) -> Point {
        let rad = degrees.to_radians();
        Point::new(self.center.x + rad.cos() * r, self.center.y + rad.sin() * r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn x_scaler_maps_left_to_right() {
        let s = Scaler::new(Point::new(10.0, 0.0), Size::new(100.0, 50.0), Orientation::X, Bounds::new(0.0, 10.0), ScaleKind::Linear, false).unwrap();
        assert!(approx(s.to_pixels(0.0), 10.0));
        assert!(approx(s.to_pixels(10.0), 110.0));
        assert!(approx(s.to_pixels(5.0), 60.0));
        assert!(approx(s.to_chart_values(60.0), 5.0));
        assert!(approx(s.measure_in_pixels(1.0), 10.0));
    }

    #[test]
    fn y_scaler_grows_upwards() {
        let s = Scaler::new(Point::new(0.0, 20.0), Size::new(100.0, 200.0), Orientation::Y, Bounds::new(0.0, 100.0), ScaleKind::Linear, false).unwrap();
        assert!(approx(s.to_pixels(0.0), 220.0));
        assert!(approx(s.to_pixels(100.0), 20.0));
        assert!(approx(s.to_chart_values(120.0), 50.0));
    }

    #[test]
    fn inverted_swaps_ends() {
        let s = Scaler::new(Point::ORIGIN, Size::new(100.0, 100.0), Orientation::X, Bounds::new(0.0, 1.0), ScaleKind::Linear, true).unwrap();
        assert!(approx(s.to_pixels(0.0), 100.0));
        assert!(approx(s.to_pixels(1.0), 0.0));
    }

    #[test]
    fn log_scale_maps_decades_evenly() {
        let s = Scaler::new(Point::ORIGIN, Size::new(300.0, 10.0), Orientation::X, Bounds::new(1.0, 1000.0), ScaleKind::Log10, false).unwrap();
        assert!(approx(s.to_pixels(10.0), 100.0));
        assert!(approx(s.to_pixels(100.0), 200.0));
        assert!((s.to_chart_values(200.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn log_scale_rejects_non_positive_bounds() {
        let err = Scaler::new(Point::ORIGIN, Size::new(1.0, 1.0), Orientation::Y, Bounds::new(0.0, 10.0), ScaleKind::Log10, false);
        assert!(matches!(err, Err(ChartError::NonPositiveLogBound { .. })));
    }

    #[test]
    fn degenerate_bounds_do_not_divide_by_zero() {
        let s = Scaler::new(Point::ORIGIN, Size::new(100.0, 100.0), Orientation::X, Bounds::new(3.0, 3.0), ScaleKind::Linear, false).unwrap();
        assert!(s.to_pixels(3.0).is_finite());
    }

    #[test]
    fn polar_places_points_around_center() {
        let angle = PolarRange::linear(Bounds::new(0.0, 4.0));
        let s = PolarScaler::new(Point::ORIGIN, Size::new(200.0, 100.0), angle, PolarRange::linear(Bounds::new(0.0, 10.0)), 0.0, 0.0, 360.0).unwrap();
        assert_eq!(s.center(), Point::new(100.0, 50.0));
        assert!(approx(s.outer_radius(), 50.0));
        let p = s.to_pixels(0.0, 10.0);
        assert!(approx(p.x, 150.0) && approx(p.y, 50.0));
        // a quarter turn is clockwise on screen (towards +y)
        let q = s.to_pixels(1.0, 10.0);
        assert!(approx(q.x, 100.0) && approx(q.y, 100.0));
        assert!(approx(s.to_radius(0.0), 0.0));
    }

    #[test]
    fn polar_radius_follows_log_scale() {
        let angle = PolarRange::linear(Bounds::new(0.0, 4.0));
        let radius = PolarRange { limits: Bounds::new(1.0, 1000.0), kind: ScaleKind::Log10, inverted: false };
        let s = PolarScaler::new(Point::ORIGIN, Size::new(200.0, 200.0), angle, radius, 0.0, 0.0, 360.0).unwrap();
        assert!(approx(s.to_radius(1.0), 0.0));
        assert!((s.to_radius(10.0) - 100.0 / 3.0).abs() < 1e-9);
        assert!((s.to_radius(100.0) - 200.0 / 3.0).abs() < 1e-9);
        assert!(approx(s.to_radius(1000.0), 100.0));
    }

    #[test]
    fn polar_inverted_axes_run_backwards() {
        let angle = PolarRange { limits: Bounds::new(0.0, 4.0), kind: ScaleKind::Linear, inverted: true };
        let radius = PolarRange { limits: Bounds::new(0.0, 10.0), kind: ScaleKind::Linear, inverted: true };
        let s = PolarScaler::new(Point::ORIGIN, Size::new(200.0, 200.0), angle, radius, 0.0, 0.0, 360.0).unwrap();
        assert!(approx(s.to_radius(10.0), 0.0));
        assert!(approx(s.to_radius(0.0), 100.0));
        assert!(approx(s.to_degrees(1.0), 270.0));
    }

    #[test]
    fn polar_log_radius_rejects_non_positive_bounds() {
        let angle = PolarRange::linear(Bounds::new(0.0, 4.0));
        let radius = PolarRange { limits: Bounds::new(0.0, 10.0), kind: ScaleKind::Log10, inverted: false };
        let err = PolarScaler::new(Point::ORIGIN, Size::new(10.0, 10.0), angle, radius, 0.0, 0.0, 360.0);
        assert!(matches!(err, Err(ChartError::NonPositiveLogBound { .. })));
    }

    #[test]
    fn limits_wider_than_f64_max_stay_finite() {
        let s = Scaler::new(Point::ORIGIN, Size::new(100.0, 100.0), Orientation::X, Bounds::new(-1e308, 1e308), ScaleKind::Linear, false).unwrap();
        assert!(approx(s.to_pixels(-1e308), 0.0));
        assert!(approx(s.to_pixels(0.0), 50.0));
        assert!(approx(s.to_pixels(1e308), 100.0));
        assert!((s.to_chart_values(100.0) - 1e308).abs() <= 1e293);
    }
}
