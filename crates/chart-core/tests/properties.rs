// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for scaling monotonicity, easing endpoints and gap-free stacking.

use std::time::Duration;

use chart_core::{
    Animation, Bounds, CartesianChart, Easing, Orientation, Point, RecordingSurface, ScaleKind, Scaler, Series,
    SeriesKind, Size,
};
use proptest::prelude::*;

fn easing() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::QuadraticIn),
        Just(Easing::QuadraticOut),
        Just(Easing::CubicIn),
        Just(Easing::CubicOut),
        Just(Easing::CubicInOut),
        Just(Easing::SinIn),
        Just(Easing::SinOut),
        Just(Easing::ExponentialOut),
        Just(Easing::BounceOut),
        Just(Easing::ElasticOut),
        Just(Easing::Ease),
    ]
}

proptest! {
    #[test]
    fn y_scaler_is_monotonic(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        height in 10.0f64..4000.0,
    ) {
        let limits = Bounds::new(min, min + span);
        let s = Scaler::new(Point::new(0.0, 0.0), Size::new(100.0, height), Orientation::Y, limits, ScaleKind::Linear, false).unwrap();
        let (va, vb) = (min + a * span, min + b * span);
        if va < vb {
            // larger values sit higher on screen
            prop_assert!(s.to_pixels(va) >= s.to_pixels(vb));
        }
        let px = s.to_pixels(va);
        prop_assert!(px >= -1e-6 && px <= height + 1e-6);
        prop_assert!((s.to_chart_values(px) - va).abs() <= span * 1e-9 + 1e-6);
    }

    #[test]
    fn easings_hit_their_endpoints(e in easing()) {
        prop_assert!(e.apply(0.0).abs() < 1e-9);
        prop_assert!((e.apply(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn stacked_series_have_no_holes(
        a in prop::collection::vec(prop::option::of(0.0f64..100.0), 1..24),
        b in prop::collection::vec(prop::option::of(0.0f64..100.0), 1..24),
    ) {
        let mut chart = CartesianChart::new(640.0, 480.0);
        chart.animation = Animation::none();
        let mut first = Series::new(SeriesKind::StackedArea);
        first.set_optional_values(a.clone());
        let mut second = Series::new(SeriesKind::StackedArea);
        second.set_optional_values(b.clone());
        chart.add_series(first);
        chart.add_series(second);
        chart.draw(&mut RecordingSurface::new(640.0, 480.0), Duration::ZERO).unwrap();

        let lower = chart.points(0).unwrap();
        let upper = chart.points(1).unwrap();
        for p in lower.iter().chain(upper) {
            prop_assert!(!p.is_empty);
            prop_assert!(p.visual.is_some() && p.bezier.is_some() && p.base_bezier.is_some());
        }
        // where both series have a sample, the upper one starts on the lower one's end
        for (l, u) in lower.iter().zip(upper) {
            prop_assert_eq!(l.stacked_value.unwrap().end, u.stacked_value.unwrap().start);
            prop_assert!(u.visual.unwrap().y() <= l.visual.unwrap().y() + 1e-9);
        }
    }
}
