// File: crates/chart-core/src/polar.rs
// Summary: Polar chart orchestrator: angle/radius axes, radial grid and polar line series.

use std::f64::consts::PI;
use std::time::Duration;

use kurbo::{Circle, Shape};
use log::{debug, warn};

use crate::animation::Animation;
use crate::axis::{Axis, ScaleKind};
use crate::bounds::Bounds;
use crate::chart::{inset_margin, label_style, measure_labels, validate_size, FrameState, PADDING};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::geometry::{BezPath, Point, Size};
use crate::materialize::materialize_polar;
use crate::scale::{PolarRange, PolarScaler};
use crate::series::{merged_bounds, ChartPoint, Origin, Series};
use crate::surface::{DrawingSurface, Stroke, TextAlign};
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct PolarChart {
    series: Vec<Series>,
    angle_axis: Axis,
    radius_axis: Axis,
    size: Size,
    margin: Option<Insets>,
    /// Radius of the hole in the middle, in pixels.
    pub inner_radius: f64,
    /// Screen angle (degrees, clockwise from 3 o'clock) of the angle axis minimum.
    pub initial_rotation: f64,
    /// Degrees spanned by the angle axis.
    pub total_angle: f64,
    /// Radial separators as circles; `false` draws polygons through the spokes.
    pub circular_separators: bool,
    pub animation: Animation,
    pub theme: Theme,

    scaler: Option<PolarScaler>,
    draw_margin_location: Point,
    draw_margin_size: Size,
    angle_limits: Bounds,
    radius_limits: Bounds,
    angle_separators: Vec<f64>,
    radius_separators: Vec<f64>,
    dirty: bool,
}

impl Default for PolarChart {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}

impl PolarChart {
    pub fn new(width: f64, height: f64) -> Self {
        let size = Size::new(width, height);
        Self {
            series: Vec::new(),
            angle_axis: Axis::default(),
            radius_axis: Axis::default(),
            size,
            margin: None,
            inner_radius: 0.0,
            initial_rotation: 0.0,
            total_angle: 360.0,
            circular_separators: true,
            animation: Animation::default(),
            theme: Theme::default(),
            scaler: None,
            draw_margin_location: Point::ORIGIN,
            draw_margin_size: size,
            angle_limits: Bounds::new(0.0, 1.0),
            radius_limits: Bounds::new(0.0, 1.0),
            angle_separators: Vec::new(),
            radius_separators: Vec::new(),
            dirty: true,
        }
    }

    /// `x_axis` configures the angle axis and `y_axis` the radius axis.
    pub fn with_config(config: &ChartConfig) -> Self {
        let mut chart = Self::new(config.width, config.height);
        chart.margin = config.margin;
        chart.animation = config.animation;
        chart.theme = theme::find(&config.theme);
        config.x_axis.apply(&mut chart.angle_axis);
        config.y_axis.apply(&mut chart.radius_axis);
        chart
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool { self.dirty }

    pub fn add_series(&mut self, series: Series) {
        if !series.kind.is_polar() {
            warn!("{:?} series added to a polar chart will not be drawn", series.kind);
        }
        self.series.push(series);
        self.dirty = true;
    }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn series_mut(&mut self, index: usize) -> Result<&mut Series> {
        let len = self.series.len();
        self.dirty = true;
        self.series.get_mut(index).ok_or(ChartError::SeriesIndex { index, len })
    }

    pub fn angle_axis(&self) -> &Axis { &self.angle_axis }
    pub fn radius_axis(&self) -> &Axis { &self.radius_axis }

    pub fn set_angle_axis(&mut self, axis: Axis) {
        self.angle_axis = axis;
        self.dirty = true;
    }

    pub fn set_radius_axis(&mut self, axis: Axis) {
        self.radius_axis = axis;
        self.dirty = true;
    }

    pub fn size(&self) -> Size { self.size }

    pub fn set_size(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        if size != self.size {
            self.size = size;
            self.dirty = true;
        }
    }

    pub fn set_margin(&mut self, margin: Option<Insets>) {
        self.margin = margin;
        self.dirty = true;
    }

    pub fn draw_margin_location(&self) -> Point { self.draw_margin_location }
    pub fn draw_margin_size(&self) -> Size { self.draw_margin_size }
    pub fn angle_limits(&self) -> Bounds { self.angle_limits }
    pub fn radius_limits(&self) -> Bounds { self.radius_limits }
    pub fn scaler(&self) -> Option<PolarScaler> { self.scaler }

    pub fn points(&self, series_index: usize) -> Result<&[ChartPoint]> {
        self.series
            .get(series_index)
            .map(Series::points)
            .ok_or(ChartError::SeriesIndex { index: series_index, len: self.series.len() })
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.series.iter().any(|s| s.is_animating(now))
    }

    fn polar_series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| s.visible && s.kind.is_polar())
    }

    pub fn measure<S: DrawingSurface + ?Sized>(&mut self, surface: &S, now: Duration) -> Result<()> {
        validate_size(self.size)?;

        let bounds = merged_bounds(self.polar_series().map(|s| s.bounds(None)));

        // closed lines leave one slot after the last sample so it does not sit on the first
        let mut angle_data = bounds.secondary;
        if !angle_data.is_empty() && self.polar_series().any(|s| s.is_closed) {
            angle_data.max += 1.0;
        }
        let angle_limits = self.angle_axis.resolve_limits(angle_data, 0.0)?;

        let mut radius_data = bounds.primary;
        if self.radius_axis.kind == ScaleKind::Linear && !radius_data.is_empty() {
            radius_data.append(0.0);
        }
        let radius_limits = self.radius_axis.resolve_limits(radius_data, 0.0)?;

        let angle_separators = self.angle_axis.separators(angle_limits, PI * self.size.width.min(self.size.height));
        let (location, size) = match &self.margin {
            Some(m) => inset_margin(self.size, m),
            None => {
                let style = label_style(&self.angle_axis, &self.theme, TextAlign::Middle);
                let labels = if self.angle_axis.visible {
                    measure_labels(surface, &self.angle_axis, &angle_separators, &style)
                } else {
                    Size::ZERO
                };
                let side = (PADDING * 2.0 + labels.width.max(labels.height)).ceil() as u32;
                inset_margin(self.size, &Insets::uniform(side))
            }
        };

        let scaler = PolarScaler::new(
            location,
            size,
            PolarRange::of(&self.angle_axis, angle_limits),
            PolarRange::of(&self.radius_axis, radius_limits),
            self.inner_radius,
            self.initial_rotation,
            self.total_angle,
        )?;

        let mut total = 0usize;
        for (i, s) in self.series.iter_mut().enumerate() {
            if !s.visible || !s.kind.is_polar() { continue; }
            let points = materialize_polar(s, i, &scaler);
            total += points.len();
            s.set_targets(points, Origin::Center(scaler.center()), now, self.animation);
        }

        let radius_px = scaler.outer_radius() - scaler.inner_radius();
        self.radius_separators = self.radius_axis.separators(radius_limits, radius_px);
        self.angle_separators = angle_separators;
        self.angle_limits = angle_limits;
        self.radius_limits = radius_limits;
        self.draw_margin_location = location;
        self.draw_margin_size = size;
        self.scaler = Some(scaler);
        self.dirty = false;

        debug!(
            "measured polar chart: angle {:?}, radius {:?}, outer radius {:.1}, {} points",
            angle_limits,
            radius_limits,
            scaler.outer_radius(),
            total
        );
        Ok(())
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, now: Duration) -> Result<FrameState> {
        let surface_size = surface.size();
        if surface_size != self.size {
            self.size = surface_size;
            self.dirty = true;
        }
        if self.dirty {
            self.measure(&*surface, now)?;
        }

        surface.clear(self.theme.background);
        self.draw_grid(surface);
        for (i, s) in self.series.iter().enumerate() {
            if !s.kind.is_polar() { continue; }
            s.draw(surface, now, &self.theme, i);
        }

        Ok(FrameState { animating: self.is_animating(now) })
    }

    /// Angle separators with their screen angle; a spoke a full turn after the first is dropped.
    fn spokes(&self, scaler: &PolarScaler) -> Vec<(f64, f64)> {
        let mut out: Vec<(f64, f64)> = Vec::with_capacity(self.angle_separators.len());
        for v in &self.angle_separators {
            let d = scaler.to_degrees(*v);
            if out.first().is_some_and(|(_, first)| d - first >= 360.0 - 1e-9) { break; }
            out.push((*v, d));
        }
        out
    }

    fn draw_grid<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let Some(scaler) = self.scaler else { return };
        let separator = Stroke::new(self.theme.separator, 1.0);
        let spokes = self.spokes(&scaler);

        if self.radius_axis.show_separator_lines {
            for v in &self.radius_separators {
                let r = scaler.to_radius(*v);
                if r <= 0.0 { continue; }
                let path = if self.circular_separators || spokes.len() < 3 {
                    Circle::new(scaler.center(), r).to_path(0.1)
                } else {
                    polygon(spokes.iter().map(|(_, d)| scaler.point_at(*d, r)))
                };
                surface.stroke_path(&path, &separator);
            }
        }

        if self.angle_axis.visible {
            let style = label_style(&self.angle_axis, &self.theme, TextAlign::Middle);
            for (v, d) in &spokes {
                if self.angle_axis.show_separator_lines {
                    surface.draw_line(
                        scaler.point_at(*d, scaler.inner_radius()),
                        scaler.point_at(*d, scaler.outer_radius()),
                        &separator,
                    );
                }
                let at = scaler.point_at(*d, scaler.outer_radius() + PADDING + style.size * 0.5);
                surface.draw_text(&self.angle_axis.label(*v), Point::new(at.x, at.y + style.size * 0.35), &style);
            }
        }

        if self.radius_axis.visible {
            let style = label_style(&self.radius_axis, &self.theme, TextAlign::Start);
            for v in &self.radius_separators {
                let at = scaler.point_at(self.radius_axis.labels_angle, scaler.to_radius(*v));
                surface.draw_text(&self.radius_axis.label(*v), at, &style);
            }
        }
    }
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 { path.move_to(p) } else { path.line_to(p) }
    }
    path.close_path();
    path
}
