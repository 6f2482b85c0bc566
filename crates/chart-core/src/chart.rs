// File: crates/chart-core/src/chart.rs
// Summary: Cartesian chart orchestrator: runs the measure pipeline and paints onto a drawing surface.

use std::time::Duration;

use log::{debug, warn};

use crate::animation::Animation;
use crate::axis::Axis;
use crate::bounds::Bounds;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Size};
use crate::materialize::materialize_cartesian;
use crate::scale::{Orientation, Scaler};
use crate::series::{merged_bounds, ChartPoint, Origin, Series};
use crate::stacking::Stacker;
use crate::surface::{DrawingSurface, Stroke, TextAlign, TextStyle};
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Gap between labels, names and the draw margin, in pixels.
pub(crate) const PADDING: f64 = 8.0;

/// Outcome of one `draw` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameState {
    /// Some visual is still transitioning; draw again to continue the animation.
    pub animating: bool,
}

pub(crate) fn validate_size(size: Size) -> Result<()> {
    if size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidSize { width: size.width, height: size.height })
    }
}

/// Draw margin inside fixed insets; never smaller than one pixel.
pub(crate) fn inset_margin(size: Size, m: &Insets) -> (Point, Size) {
    (
        Point::new(m.left as f64, m.top as f64),
        Size::new((size.width - m.hsum() as f64).max(1.0), (size.height - m.vsum() as f64).max(1.0)),
    )
}

pub(crate) fn label_style(axis: &Axis, theme: &Theme, align: TextAlign) -> TextStyle {
    let mut style = TextStyle::new(axis.text_size, theme.axis_label).aligned(align);
    style.rotation = axis.labels_rotation;
    style
}

/// Largest label width and height over `values`.
pub(crate) fn measure_labels<S: DrawingSurface + ?Sized>(surface: &S, axis: &Axis, values: &[f64], style: &TextStyle) -> Size {
    values.iter().fold(Size::ZERO, |acc, v| {
        let s = surface.measure_text(&axis.label(*v), style);
        Size::new(acc.width.max(s.width), acc.height.max(s.height))
    })
}

pub struct CartesianChart {
    series: Vec<Series>,
    x_axis: Axis,
    y_axis: Axis,
    size: Size,
    /// Fixed insets; `None` measures them from the axis labels.
    margin: Option<Insets>,
    pub animation: Animation,
    pub theme: Theme,

    stacker: Stacker,
    scalers: Option<(Scaler, Scaler)>,
    draw_margin_location: Point,
    draw_margin_size: Size,
    x_limits: Bounds,
    y_limits: Bounds,
    x_separators: Vec<f64>,
    y_separators: Vec<f64>,
    dirty: bool,
}

impl Default for CartesianChart {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}

impl CartesianChart {
    pub fn new(width: f64, height: f64) -> Self {
        let size = Size::new(width, height);
        Self {
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            size,
            margin: None,
            animation: Animation::default(),
            theme: Theme::default(),
            stacker: Stacker::new(),
            scalers: None,
            draw_margin_location: Point::ORIGIN,
            draw_margin_size: size,
            x_limits: Bounds::new(0.0, 1.0),
            y_limits: Bounds::new(0.0, 1.0),
            x_separators: Vec::new(),
            y_separators: Vec::new(),
            dirty: true,
        }
    }

    pub fn with_config(config: &ChartConfig) -> Self {
        let mut chart = Self::new(config.width, config.height);
        chart.margin = config.margin;
        chart.animation = config.animation;
        chart.theme = theme::find(&config.theme);
        config.x_axis.apply(&mut chart.x_axis);
        config.y_axis.apply(&mut chart.y_axis);
        chart
    }

    /// Mark the chart for a new measure on the next draw.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool { self.dirty }

    pub fn add_series(&mut self, series: Series) {
        if series.kind.is_polar() {
            warn!("polar series added to a cartesian chart will not be drawn");
        }
        self.series.push(series);
        self.dirty = true;
    }

    pub fn remove_series(&mut self, index: usize) -> Result<Series> {
        if index >= self.series.len() {
            return Err(ChartError::SeriesIndex { index, len: self.series.len() });
        }
        self.dirty = true;
        Ok(self.series.remove(index))
    }

    pub fn series(&self) -> &[Series] { &self.series }

    /// Mutable access to a series; the chart re-measures on the next draw.
    pub fn series_mut(&mut self, index: usize) -> Result<&mut Series> {
        let len = self.series.len();
        self.dirty = true;
        self.series.get_mut(index).ok_or(ChartError::SeriesIndex { index, len })
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    pub fn set_x_axis(&mut self, axis: Axis) {
        self.x_axis = axis;
        self.dirty = true;
    }

    pub fn set_y_axis(&mut self, axis: Axis) {
        self.y_axis = axis;
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
    pub fn x_limits(&self) -> Bounds { self.x_limits }
    pub fn y_limits(&self) -> Bounds { self.y_limits }
    pub fn x_separators(&self) -> &[f64] { &self.x_separators }
    pub fn y_separators(&self) -> &[f64] { &self.y_separators }

    /// Scalers of the last measure, `(x, y)`.
    pub fn scalers(&self) -> Option<(Scaler, Scaler)> { self.scalers }

    /// Points of a series as resolved by the last measure.
    pub fn points(&self, series_index: usize) -> Result<&[ChartPoint]> {
        self.series
            .get(series_index)
            .map(Series::points)
            .ok_or(ChartError::SeriesIndex { index: series_index, len: self.series.len() })
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.series.iter().any(|s| s.is_animating(now))
    }

    /// One redraw cycle of computation: stack, bound, scale, materialize.
    ///
    /// `surface` is only used to measure label text for the automatic margin.
    pub fn measure<S: DrawingSurface + ?Sized>(&mut self, surface: &S, now: Duration) -> Result<()> {
        validate_size(self.size)?;

        self.stacker.clear();
        let positions: Vec<Option<usize>> = self
            .series
            .iter()
            .map(|s| (s.visible && s.kind.is_stacked()).then(|| self.stacker.position_for(s.stack_group)))
            .collect();
        for (s, pos) in self.series.iter().zip(&positions) {
            let Some(p) = *pos else { continue };
            for d in s.data() {
                self.stacker.stack(s.stack_group, p, d.secondary, d.value().unwrap_or(0.0));
            }
        }

        let bounds = merged_bounds(
            self.series
                .iter()
                .zip(&positions)
                .filter(|(s, _)| s.visible && !s.kind.is_polar())
                .map(|(s, pos)| s.bounds(pos.map(|p| (&self.stacker, p)))),
        );

        let x_limits = self.x_axis.resolve_limits(bounds.secondary, self.x_axis.unit_width * 0.5)?;
        let y_limits = self.y_axis.resolve_limits(bounds.primary, 0.0)?;

        let (location, size) = match &self.margin {
            Some(m) => inset_margin(self.size, m),
            None => self.auto_margin(surface, x_limits, y_limits),
        };

        let x = Scaler::new(location, size, Orientation::X, x_limits, self.x_axis.kind, self.x_axis.inverted)?;
        let y = Scaler::new(location, size, Orientation::Y, y_limits, self.y_axis.kind, self.y_axis.inverted)?;
        let pivot = y.clamp_pixels(y.to_pixels(0.0));

        let mut total = 0usize;
        for (i, (s, pos)) in self.series.iter_mut().zip(&positions).enumerate() {
            if !s.visible || s.kind.is_polar() { continue; }
            let points = materialize_cartesian(s, i, &x, &y, pos.map(|p| (&self.stacker, p)));
            total += points.len();
            s.set_targets(points, Origin::Baseline(pivot), now, self.animation);
        }

        self.x_separators = self.x_axis.separators(x_limits, size.width);
        self.y_separators = self.y_axis.separators(y_limits, size.height);
        self.x_limits = x_limits;
        self.y_limits = y_limits;
        self.draw_margin_location = location;
        self.draw_margin_size = size;
        self.scalers = Some((x, y));
        self.dirty = false;

        debug!(
            "measured cartesian chart: x {:?}, y {:?}, draw margin {:?} at {:?}, {} points",
            x_limits, y_limits, size, location, total
        );
        Ok(())
    }

    fn auto_margin<S: DrawingSurface + ?Sized>(&self, surface: &S, x_limits: Bounds, y_limits: Bounds) -> (Point, Size) {
        let (mut left, mut top, mut right, mut bottom) = (PADDING, PADDING, PADDING, PADDING);

        if self.y_axis.visible {
            let style = label_style(&self.y_axis, &self.theme, TextAlign::End);
            let labels = measure_labels(surface, &self.y_axis, &self.y_axis.separators(y_limits, self.size.height), &style);
            left += labels.width + PADDING;
            top = top.max(labels.height * 0.5 + PADDING);
            if let Some(name) = &self.y_axis.name {
                left += surface.measure_text(name, &style).height + PADDING;
            }
        }

        if self.x_axis.visible {
            let style = label_style(&self.x_axis, &self.theme, TextAlign::Middle);
            let labels = measure_labels(surface, &self.x_axis, &self.x_axis.separators(x_limits, self.size.width), &style);
            bottom += labels.height + PADDING;
            right = right.max(labels.width * 0.5 + PADDING);
            if let Some(name) = &self.x_axis.name {
                bottom += surface.measure_text(name, &style).height + PADDING;
            }
        }

        inset_margin(self.size, &Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32))
    }

    /// Measure if anything changed, then paint the frame as it looks at `now`.
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
        self.draw_axes(surface);
        for (i, s) in self.series.iter().enumerate() {
            if s.kind.is_polar() { continue; }
            s.draw(surface, now, &self.theme, i);
        }

        Ok(FrameState { animating: self.is_animating(now) })
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let Some((x, y)) = self.scalers else { return };
        let loc = self.draw_margin_location;
        let size = self.draw_margin_size;
        let (left, top) = (loc.x, loc.y);
        let (right, bottom) = (loc.x + size.width, loc.y + size.height);
        let separator = Stroke::new(self.theme.separator, 1.0);

        if self.x_axis.visible {
            let style = label_style(&self.x_axis, &self.theme, TextAlign::Middle);
            for v in &self.x_separators {
                let px = x.to_pixels(*v);
                if self.x_axis.show_separator_lines {
                    surface.draw_line(Point::new(px, top), Point::new(px, bottom), &separator);
                }
                surface.draw_text(&self.x_axis.label(*v), Point::new(px, bottom + PADDING + style.size), &style);
            }
            if let Some(name) = &self.x_axis.name {
                let mut name_style = style;
                name_style.color = self.theme.axis_name;
                name_style.rotation = 0.0;
                surface.draw_text(name, Point::new(left + size.width * 0.5, self.size.height - PADDING), &name_style);
            }
        }

        if self.y_axis.visible {
            let style = label_style(&self.y_axis, &self.theme, TextAlign::End);
            for v in &self.y_separators {
                let py = y.to_pixels(*v);
                if self.y_axis.show_separator_lines {
                    surface.draw_line(Point::new(left, py), Point::new(right, py), &separator);
                }
                surface.draw_text(&self.y_axis.label(*v), Point::new(left - PADDING, py + style.size * 0.35), &style);
            }
            if let Some(name) = &self.y_axis.name {
                let mut name_style = style.aligned(TextAlign::Middle);
                name_style.color = self.theme.axis_name;
                name_style.rotation = -90.0;
                surface.draw_text(name, Point::new(PADDING + style.size, top + size.height * 0.5), &name_style);
            }
        }
    }
}
