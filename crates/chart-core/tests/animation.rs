// File: crates/chart-core/tests/animation.rs
// Purpose: Points grow out of the zero line and re-target smoothly when data changes.

use std::time::Duration;

use chart_core::{Animation, Axis, CartesianChart, Easing, Insets, RecordingSurface, Series};

fn ms(v: u64) -> Duration { Duration::from_millis(v) }

fn chart() -> CartesianChart {
    let mut chart = CartesianChart::new(200.0, 200.0);
    chart.animation = Animation::new(ms(800), Easing::Linear);
    chart.set_margin(Some(Insets::uniform(0)));
    chart.set_y_axis(Axis::with_limits(0.0, 10.0));
    chart.add_series(Series::line([5.0, 10.0]));
    chart
}

#[test_log::test]
fn new_points_rise_from_the_pivot() {
    let mut chart = chart();
    let mut surface = RecordingSurface::new(200.0, 200.0);

    assert!(chart.draw(&mut surface, ms(0)).unwrap().animating);
    let start = chart.series()[0].geometries_at(ms(0));
    assert!(start.iter().all(|g| g.y() == 200.0));

    let half = chart.series()[0].geometries_at(ms(400));
    assert!((half[0].y() - 150.0).abs() < 1e-9);
    assert!((half[1].y() - 100.0).abs() < 1e-9);

    let frame = chart.draw(&mut surface, ms(800)).unwrap();
    assert!(!frame.animating);
    let end = chart.series()[0].geometries_at(ms(800));
    assert_eq!((end[0].y(), end[1].y()), (100.0, 0.0));
}

#[test_log::test]
fn data_changes_start_from_the_displayed_value() {
    let mut chart = chart();
    let mut surface = RecordingSurface::new(200.0, 200.0);
    chart.draw(&mut surface, ms(0)).unwrap();
    chart.draw(&mut surface, ms(800)).unwrap();

    chart.series_mut(0).unwrap().set_values([0.0, 10.0]);
    assert!(chart.is_dirty());
    let frame = chart.draw(&mut surface, ms(1000)).unwrap();
    assert!(frame.animating);

    let g = chart.series()[0].geometries_at(ms(1000));
    assert_eq!(g[0].y(), 100.0);
    let g = chart.series()[0].geometries_at(ms(1400));
    assert!((g[0].y() - 150.0).abs() < 1e-9);
    // the unchanged point does not move
    assert_eq!(g[1].y(), 0.0);
    let g = chart.series()[0].geometries_at(ms(1800));
    assert_eq!(g[0].y(), 200.0);
}

#[test_log::test]
fn redraw_without_changes_does_not_restart() {
    let mut chart = chart();
    let mut surface = RecordingSurface::new(200.0, 200.0);
    chart.draw(&mut surface, ms(0)).unwrap();
    chart.invalidate();
    chart.draw(&mut surface, ms(400)).unwrap();
    // the targets are unchanged, so the transition keeps its original clock
    assert!(!chart.draw(&mut surface, ms(800)).unwrap().animating);
}

#[test_log::test]
fn removed_points_disappear() {
    let mut chart = chart();
    chart.animation = Animation::none();
    let mut surface = RecordingSurface::new(200.0, 200.0);
    chart.draw(&mut surface, ms(0)).unwrap();
    chart.series_mut(0).unwrap().set_values([5.0]);
    chart.draw(&mut surface, ms(10)).unwrap();
    assert_eq!(chart.series()[0].geometries_at(ms(10)).len(), 1);
    assert_eq!(surface.geometries().count(), 1);
}

#[test_log::test]
fn hidden_series_do_not_keep_the_frame_animating() {
    let mut chart = chart();
    let mut surface = RecordingSurface::new(200.0, 200.0);
    assert!(chart.draw(&mut surface, ms(0)).unwrap().animating);

    chart.series_mut(0).unwrap().visible = false;
    let frame = chart.draw(&mut surface, ms(100)).unwrap();
    assert!(!frame.animating);
    assert_eq!(surface.geometries().count(), 0);
}
