// File: crates/chart-core/src/materialize.rs
// Summary: Point materializer: resolves each sample to screen coordinates, geometry and bezier segments.

use std::ops::Range;

use log::{trace, warn};

use crate::bezier::segments;
use crate::geometry::{BezierSegment, Point, PointGeometry};
use crate::scale::{PolarScaler, Scaler};
use crate::series::{ChartPoint, Series};
use crate::stacking::Stacker;

/// Index ranges of consecutive `Some` entries.
fn runs<T>(items: &[Option<T>]) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, item) in items.iter().enumerate() {
        match (item.is_some(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start { out.push(s..items.len()); }
    out
}

/// Bezier segments over each run of screen points; `None` where a point is empty.
fn smooth(screen: &[Option<Point>], smoothness: f64, closed: bool) -> Vec<Option<BezierSegment>> {
    let mut out = vec![None; screen.len()];
    for run in runs(screen) {
        let pts: Vec<Point> = screen[run.clone()].iter().flatten().copied().collect();
        for (slot, seg) in out[run].iter_mut().zip(segments(&pts, smoothness, closed)) {
            *slot = Some(seg);
        }
    }
    out
}

fn warn_non_finite(series: &Series, series_index: usize) {
    let bad = series.data().iter().filter(|d| d.primary.is_some_and(|v| !v.is_finite())).count();
    if bad > 0 {
        warn!("series {series_index}: {bad} non-finite value(s) treated as empty");
    }
}

/// Resolve a cartesian series (line, area, stacked area) against its scalers.
///
/// `stack` carries the stacker and this series' position in its group for
/// stacked kinds; stacked samples are placed at the end of their slice and
/// empty samples stack as zero so the stack never has holes.
pub fn materialize_cartesian(
    series: &Series,
    series_index: usize,
    x: &Scaler,
    y: &Scaler,
    stack: Option<(&Stacker, usize)>,
) -> Vec<ChartPoint> {
    warn_non_finite(series, series_index);
    let size = series.geometry_size;

    let mut points = Vec::with_capacity(series.data().len());
    let mut screen = Vec::with_capacity(series.data().len());
    let mut base_screen = Vec::with_capacity(series.data().len());

    for (index, dp) in series.data().iter().enumerate() {
        let stacked = stack.and_then(|(stacker, position)| stacker.get(series.stack_group, position, dp.secondary));
        let value = dp.value();
        let is_empty = stacked.is_none() && value.is_none();

        let px = x.to_pixels(dp.secondary);
        let (top, base) = match stacked {
            Some(sv) => (Some(Point::new(px, y.to_pixels(sv.end))), Some(Point::new(px, y.to_pixels(sv.start)))),
            None => (value.map(|v| Point::new(px, y.to_pixels(v))), None),
        };
        screen.push(top);
        base_screen.push(base);

        points.push(ChartPoint {
            series_index,
            index,
            primary_value: value.unwrap_or(0.0),
            secondary_value: dp.secondary,
            stacked_value: stacked,
            is_empty,
            visual: top.map(|c| PointGeometry::square(c, size)),
            bezier: None,
            base_bezier: None,
        });
    }

    let top = smooth(&screen, series.line_smoothness, false);
    let base = smooth(&base_screen, series.line_smoothness, false);
    for ((p, t), b) in points.iter_mut().zip(top).zip(base) {
        p.bezier = t;
        p.base_bezier = b;
    }

    trace!("series {series_index}: {} cartesian points", points.len());
    points
}

/// Resolve a polar line against the polar scaler; samples map as
/// `(secondary -> angle, primary -> radius)`.
pub fn materialize_polar(series: &Series, series_index: usize, scaler: &PolarScaler) -> Vec<ChartPoint> {
    warn_non_finite(series, series_index);
    let size = series.geometry_size;

    let screen: Vec<Option<Point>> = series
        .data()
        .iter()
        .map(|dp| dp.value().map(|v| scaler.to_pixels(dp.secondary, v)))
        .collect();
    let segs = smooth(&screen, series.line_smoothness, series.closes_path());

    let points: Vec<ChartPoint> = series
        .data()
        .iter()
        .zip(screen)
        .zip(segs)
        .enumerate()
        .map(|(index, ((dp, pt), seg))| ChartPoint {
            series_index,
            index,
            primary_value: dp.value().unwrap_or(0.0),
            secondary_value: dp.secondary,
            stacked_value: None,
            is_empty: pt.is_none(),
            visual: pt.map(|c| PointGeometry::square(c, size)),
            bezier: seg,
            base_bezier: None,
        })
        .collect();

    trace!("series {series_index}: {} polar points", points.len());
    points
}
