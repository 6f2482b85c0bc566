// File: crates/chart-core/src/series.rs
// Summary: Series model (lines, areas, stacked areas, polar lines), resolved chart points and their animated visuals.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, Motion};
use crate::bezier::{append_reversed, path_from_segments};
use crate::bounds::DimensionalBounds;
use crate::geometry::{BezPath, BezierSegment, Point, PointGeometry};
use crate::stacking::{StackedValue, Stacker};
use crate::surface::{DrawingSurface, GeometryStyle, Stroke};
use crate::theme::Theme;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Area,
    StackedArea,
    PolarLine,
}

impl SeriesKind {
    pub fn is_stacked(self) -> bool { matches!(self, SeriesKind::StackedArea) }
    pub fn is_polar(self) -> bool { matches!(self, SeriesKind::PolarLine) }
    pub fn has_fill(self) -> bool { matches!(self, SeriesKind::Area | SeriesKind::StackedArea) }
}

/// One input sample: `primary` is the value, `secondary` its position along
/// the category axis (the sample index unless given explicitly).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub secondary: f64,
    pub primary: Option<f64>,
}

impl DataPoint {
    pub const fn new(secondary: f64, primary: f64) -> Self {
        Self { secondary, primary: Some(primary) }
    }

    pub const fn empty(secondary: f64) -> Self {
        Self { secondary, primary: None }
    }

    /// The value, or `None` for gaps and non-finite samples.
    pub fn value(&self) -> Option<f64> {
        self.primary.filter(|v| v.is_finite())
    }
}

/// A sample resolved against the chart's axes during the last measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub series_index: usize,
    pub index: usize,
    pub primary_value: f64,
    pub secondary_value: f64,
    pub stacked_value: Option<StackedValue>,
    pub is_empty: bool,
    /// Target geometry; `None` for empty samples.
    pub visual: Option<PointGeometry>,
    /// Segment from the previous point in the same run to this one.
    pub bezier: Option<BezierSegment>,
    /// Stacked series: segment along the stack start, used to close the fill.
    pub base_bezier: Option<BezierSegment>,
}

/// Where newly appearing points grow from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Origin {
    /// Cartesian series grow vertically out of this pixel row.
    Baseline(f64),
    /// Polar series grow out of the center.
    Center(Point),
}

#[derive(Clone, Copy, Debug)]
struct PointVisual {
    geometry: Motion<PointGeometry>,
    bezier: Motion<BezierSegment>,
    base: Option<Motion<BezierSegment>>,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: Option<String>,
    pub kind: SeriesKind,
    data: Vec<DataPoint>,
    /// Width and height of the geometry drawn at each point, in pixels.
    pub geometry_size: f64,
    /// 0 draws straight segments, 1 fully smoothed curves.
    pub line_smoothness: f64,
    /// Stacked series with the same group stack on each other.
    pub stack_group: i32,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub geometry_fill: Option<Color>,
    pub stroke_thickness: f64,
    /// Polar lines: connect the last point back to the first.
    pub is_closed: bool,
    pub visible: bool,

    points: Vec<ChartPoint>,
    visuals: Vec<Option<PointVisual>>,
    // area fills close down to the baseline row
    origin: Origin,
}

impl Series {
    pub fn new(kind: SeriesKind) -> Self {
        Self {
            name: None,
            kind,
            data: Vec::new(),
            geometry_size: 14.0,
            line_smoothness: 0.65,
            stack_group: 0,
            stroke: None,
            fill: None,
            geometry_fill: None,
            stroke_thickness: 4.0,
            is_closed: true,
            visible: true,
            points: Vec::new(),
            visuals: Vec::new(),
            origin: Origin::Baseline(0.0),
        }
    }

    /// Series over `values`, positioned by index.
    pub fn with_values(kind: SeriesKind, values: impl IntoIterator<Item = f64>) -> Self {
        let mut s = Self::new(kind);
        s.set_values(values);
        s
    }

    pub fn with_data(kind: SeriesKind, data: Vec<DataPoint>) -> Self {
        let mut s = Self::new(kind);
        s.data = data;
        s
    }

    pub fn line(values: impl IntoIterator<Item = f64>) -> Self { Self::with_values(SeriesKind::Line, values) }
    pub fn area(values: impl IntoIterator<Item = f64>) -> Self { Self::with_values(SeriesKind::Area, values) }
    pub fn stacked_area(values: impl IntoIterator<Item = f64>) -> Self { Self::with_values(SeriesKind::StackedArea, values) }
    pub fn polar_line(values: impl IntoIterator<Item = f64>) -> Self { Self::with_values(SeriesKind::PolarLine, values) }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn geometry_size(mut self, size: f64) -> Self {
        self.geometry_size = size.max(0.0);
        self
    }

    pub fn line_smoothness(mut self, smoothness: f64) -> Self {
        self.line_smoothness = smoothness.clamp(0.0, 1.0);
        self
    }

    pub fn stack_group(mut self, group: i32) -> Self {
        self.stack_group = group;
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn data(&self) -> &[DataPoint] { &self.data }

    pub fn set_values(&mut self, values: impl IntoIterator<Item = f64>) {
        self.data = values.into_iter().enumerate().map(|(i, v)| DataPoint::new(i as f64, v)).collect();
    }

    /// Values with gaps; `None` breaks the line.
    pub fn set_optional_values(&mut self, values: impl IntoIterator<Item = Option<f64>>) {
        self.data = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| DataPoint { secondary: i as f64, primary: v })
            .collect();
    }

    /// Append a value positioned after the last sample.
    pub fn push(&mut self, value: f64) {
        let next = self.data.last().map_or(0.0, |d| d.secondary + 1.0);
        self.data.push(DataPoint::new(next, value));
    }

    /// Points resolved by the last measure.
    pub fn points(&self) -> &[ChartPoint] { &self.points }

    /// Data bounds; stacked series report the extent of their stack slices.
    pub fn bounds(&self, stack: Option<(&Stacker, usize)>) -> DimensionalBounds {
        let mut b = DimensionalBounds::default();
        for dp in &self.data {
            match stack {
                Some((stacker, position)) => {
                    b.secondary.append(dp.secondary);
                    if let Some(sv) = stacker.get(self.stack_group, position, dp.secondary) {
                        b.primary.append(sv.start);
                        b.primary.append(sv.end);
                    }
                }
                None => {
                    if let Some(v) = dp.value() {
                        b.secondary.append(dp.secondary);
                        b.primary.append(v);
                    }
                }
            }
        }
        b
    }

    /// Store freshly materialized points and retarget the visuals towards them.
    pub(crate) fn set_targets(&mut self, points: Vec<ChartPoint>, origin: Origin, now: Duration, animation: Animation) {
        self.visuals.resize(points.len(), None);

        for (slot, p) in self.visuals.iter_mut().zip(&points) {
            let (Some(geometry), Some(bezier)) = (p.visual, p.bezier) else {
                *slot = None;
                continue;
            };
            let visual = slot.get_or_insert_with(|| spawn(p, origin));
            visual.geometry.set_target(geometry, now, animation);
            visual.bezier.set_target(bezier, now, animation);
            visual.base = match (p.base_bezier, visual.base) {
                (Some(base), Some(mut m)) => {
                    m.set_target(base, now, animation);
                    Some(m)
                }
                (Some(base), None) => {
                    let mut m = Motion::new(flatten(base, origin));
                    m.set_target(base, now, animation);
                    Some(m)
                }
                (None, _) => None,
            };
        }

        self.points = points;
        self.origin = origin;
    }

    /// Polar lines close only when no sample is empty.
    pub fn closes_path(&self) -> bool {
        self.kind.is_polar() && self.is_closed && self.data.iter().all(|d| d.value().is_some())
    }

    /// Whether any visual of a visible series is still moving at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.visible && self.visuals.iter().flatten().any(|v| {
            !v.geometry.is_completed(now)
                || !v.bezier.is_completed(now)
                || v.base.as_ref().is_some_and(|b| !b.is_completed(now))
        })
    }

    /// Geometries as displayed at `now` (empty samples skipped).
    pub fn geometries_at(&self, now: Duration) -> Vec<PointGeometry> {
        self.visuals.iter().flatten().map(|v| v.geometry.value_at(now)).collect()
    }

    /// Contiguous runs of non-empty visuals as `(segments, base segments)` at `now`.
    fn runs_at(&self, now: Duration) -> Vec<(Vec<BezierSegment>, Vec<BezierSegment>)> {
        let mut runs = Vec::new();
        let mut top = Vec::new();
        let mut base = Vec::new();
        for v in &self.visuals {
            match v {
                Some(v) => {
                    top.push(v.bezier.value_at(now));
                    if let Some(b) = &v.base { base.push(b.value_at(now)); }
                }
                None if !top.is_empty() => runs.push((std::mem::take(&mut top), std::mem::take(&mut base))),
                None => {}
            }
        }
        if !top.is_empty() { runs.push((top, base)); }
        runs
    }

    /// Stroke and fill paths as displayed at `now`.
    pub fn paths_at(&self, now: Duration) -> SeriesPaths {
        let closed = self.closes_path();
        let filled = self.kind.has_fill() || self.fill.is_some();
        let mut out = SeriesPaths::default();
        for (top, base) in self.runs_at(now) {
            let stroke = path_from_segments(&top, closed);
            if filled && closed {
                out.fills.push(stroke.clone());
            } else if filled && !self.kind.is_polar() {
                let mut fill = stroke.clone();
                if self.kind.is_stacked() && base.len() == top.len() {
                    append_reversed(&mut fill, &base);
                } else if let (Origin::Baseline(pivot), Some(first), Some(last)) = (self.origin, top.first(), top.last()) {
                    fill.line_to(Point::new(last.xj, pivot));
                    fill.line_to(Point::new(first.xj, pivot));
                }
                fill.close_path();
                out.fills.push(fill);
            }
            out.strokes.push(stroke);
        }
        out
    }

    /// Paint fills, strokes and geometries as displayed at `now`.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, now: Duration, theme: &Theme, series_index: usize) {
        if !self.visible { return; }
        let color = self.stroke.unwrap_or_else(|| theme.series_color(series_index));
        let paths = self.paths_at(now);

        let fill = self.fill.unwrap_or(color.with_alpha(theme.fill_alpha));
        for p in &paths.fills {
            surface.fill_path(p, fill);
        }

        let stroke = Stroke::new(color, self.stroke_thickness);
        if self.stroke_thickness > 0.0 {
            for p in &paths.strokes {
                surface.stroke_path(p, &stroke);
            }
        }

        if self.geometry_size > 0.0 {
            let style = GeometryStyle {
                fill: self.geometry_fill.unwrap_or(theme.geometry_fill),
                stroke: Stroke::new(color, (self.stroke_thickness * 0.5).max(1.0)),
            };
            for g in self.geometries_at(now) {
                surface.draw_geometry(&g, &style);
            }
        }
    }
}

/// Paths of one series, one entry per contiguous run.
#[derive(Clone, Debug, Default)]
pub struct SeriesPaths {
    pub strokes: Vec<BezPath>,
    pub fills: Vec<BezPath>,
}

/// `segment` collapsed onto the spawn origin.
fn flatten(segment: BezierSegment, origin: Origin) -> BezierSegment {
    match origin {
        Origin::Baseline(y) => BezierSegment { yi: y, ym: y, yj: y, ..segment },
        Origin::Center(c) => BezierSegment::at(c),
    }
}

/// Initial visual state of a point entering the chart.
///
/// Stacked slices start flat on the baseline together with their stack
/// start, so adjacent layers move in step and stay joined.
fn spawn(p: &ChartPoint, origin: Origin) -> PointVisual {
    let (geometry, bezier) = match (origin, p.visual, p.bezier) {
        (Origin::Center(c), Some(g), _) => (PointGeometry::new(c, g.width, g.height), BezierSegment::at(c)),
        (Origin::Baseline(y), Some(g), Some(b)) => {
            (PointGeometry::new(Point::new(g.center.x, y), g.width, g.height), flatten(b, origin))
        }
        _ => (PointGeometry::square(Point::ORIGIN, 0.0), BezierSegment::default()),
    };
    PointVisual { geometry: Motion::new(geometry), bezier: Motion::new(bezier), base: None }
}

/// Bounds of several series merged.
pub fn merged_bounds(it: impl IntoIterator<Item = DimensionalBounds>) -> DimensionalBounds {
    let mut b = DimensionalBounds::default();
    for x in it { b.merge(&x); }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::axis::Axis;
    use crate::bounds::Bounds;
    use crate::chart::CartesianChart;
    use crate::surface::RecordingSurface;
    use crate::types::Insets;

    #[test]
    fn values_are_positioned_by_index() {
        let mut s = Series::line([3.0, 4.0]);
        s.push(5.0);
        let xs: Vec<f64> = s.data().iter().map(|d| d.secondary).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn non_finite_values_are_empty() {
        assert_eq!(DataPoint::new(0.0, f64::NAN).value(), None);
        assert_eq!(DataPoint::empty(0.0).value(), None);
        assert_eq!(DataPoint::new(0.0, 2.0).value(), Some(2.0));
    }

    #[test]
    fn plain_bounds_skip_gaps() {
        let mut s = Series::new(SeriesKind::Line);
        s.set_optional_values([Some(1.0), None, Some(-3.0)]);
        let b = s.bounds(None);
        assert_eq!(b.primary, Bounds::new(-3.0, 1.0));
        assert_eq!(b.secondary, Bounds::new(0.0, 2.0));
    }

    #[test]
    fn stacked_bounds_cover_slices() {
        let mut stacker = Stacker::new();
        let a = Series::stacked_area([1.0, 2.0]);
        let b = Series::stacked_area([3.0, 4.0]);
        let pa = stacker.position_for(0);
        let pb = stacker.position_for(0);
        for (s, p) in [(&a, pa), (&b, pb)] {
            for d in s.data() {
                stacker.stack(0, p, d.secondary, d.value().unwrap_or(0.0));
            }
        }
        assert_eq!(b.bounds(Some((&stacker, pb))).primary, Bounds::new(1.0, 6.0));
    }

    #[test]
    fn builder_clamps_settings() {
        let s = Series::line([1.0]).line_smoothness(3.0).geometry_size(-2.0);
        assert_eq!(s.line_smoothness, 1.0);
        assert_eq!(s.geometry_size, 0.0);
    }

    #[test]
    fn stacked_layers_stay_joined_while_growing() {
        let mut chart = CartesianChart::new(400.0, 200.0);
        chart.animation = Animation::new(Duration::from_millis(800), Easing::Linear);
        chart.set_margin(Some(Insets::uniform(0)));
        chart.set_y_axis(Axis::with_limits(0.0, 10.0));
        chart.add_series(Series::stacked_area([2.0, 2.0]));
        chart.add_series(Series::stacked_area([3.0, 3.0]));
        chart.measure(&RecordingSurface::new(400.0, 200.0), Duration::ZERO).unwrap();

        let (lower, upper) = (&chart.series()[0], &chart.series()[1]);
        for ms in [0, 200, 400, 600, 800] {
            let now = Duration::from_millis(ms);
            for (l, u) in lower.visuals.iter().flatten().zip(upper.visuals.iter().flatten()) {
                assert_eq!(l.bezier.value_at(now), u.base.unwrap().value_at(now), "at {ms} ms");
            }
        }

        // halfway from the zero row (200) to the value 2 (160)
        let half = Duration::from_millis(400);
        let lower_top = lower.visuals[1].unwrap().bezier.value_at(half);
        let upper_base = upper.visuals[1].unwrap().base.unwrap().value_at(half);
        assert_eq!((lower_top.yj, upper_base.yj), (180.0, 180.0));
        assert!(chart.is_animating(half));
        assert!(!chart.is_animating(Duration::from_millis(800)));
    }
}
