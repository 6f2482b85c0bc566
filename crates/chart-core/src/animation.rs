// File: crates/chart-core/src/animation.rs
// Summary: Easing curves and time-based transitions of chart visuals between redraws.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::{BezierSegment, Point, PointGeometry};

/// Maps normalized time onto normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SinIn,
    SinOut,
    #[default]
    ExponentialOut,
    BounceOut,
    ElasticOut,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    /// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Progress at `t`; `t` is clamped to `[0, 1]`, `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 { return t; }
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
            }
            Self::SinIn => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::SinOut => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::ExponentialOut => 1.0 - 2f64.powf(-10.0 * t),
            Self::BounceOut => bounce_out(t),
            Self::ElasticOut => {
                let c4 = (2.0 * std::f64::consts::PI) / 3.0;
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Solve the bezier's x(s) = t for s, then return y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    let curve = |a: f64, b: f64, s: f64| {
        let u = 1.0 - s;
        3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
    };

    // x(s) is monotonic for x1, x2 in [0, 1]; bisection converges without derivatives
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    let mut s = t;
    for _ in 0..48 {
        let x = curve(x1, x2, s);
        if (x - t).abs() < 1e-9 { break; }
        if x < t { lo = s; } else { hi = s; }
        s = 0.5 * (lo + hi);
    }
    curve(y1, y2, s)
}

/// Duration plus easing of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(with = "duration_ms", rename = "duration_ms")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Animation {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Transitions complete as soon as they start.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    /// Eased progress `elapsed` into the transition.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration { return 1.0; }
        self.easing.apply(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(Duration::from_millis(800), Easing::ExponentialOut)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Values that can be blended between two states.
pub trait Animatable: Copy + PartialEq {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

#[inline]
fn mix(a: f64, b: f64, t: f64) -> f64 { a + (b - a) * t }

impl Animatable for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self { mix(*self, *to, t) }
}

impl Animatable for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self { Point::lerp(*self, *to, t) }
}

impl Animatable for PointGeometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        PointGeometry {
            center: Animatable::lerp(&self.center, &to.center, t),
            width: mix(self.width, to.width, t),
            height: mix(self.height, to.height, t),
        }
    }
}

impl Animatable for BezierSegment {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        BezierSegment {
            xi: mix(self.xi, to.xi, t),
            yi: mix(self.yi, to.yi, t),
            xm: mix(self.xm, to.xm, t),
            ym: mix(self.ym, to.ym, t),
            xj: mix(self.xj, to.xj, t),
            yj: mix(self.yj, to.yj, t),
        }
    }
}

/// A value moving towards a target over time.
///
/// Time is whatever monotonic clock the caller drives redraws with, expressed
/// as a `Duration` since an arbitrary origin.
#[derive(Clone, Copy, Debug)]
pub struct Motion<T: Animatable> {
    from: T,
    to: T,
    started_at: Duration,
    animation: Animation,
}

impl<T: Animatable> Motion<T> {
    /// Motion resting at `value`.
    pub fn new(value: T) -> Self {
        Self { from: value, to: value, started_at: Duration::ZERO, animation: Animation::none() }
    }

    /// Start moving towards `to` from whatever is displayed at `now`.
    /// Re-targeting to the current target leaves a running transition alone.
    pub fn set_target(&mut self, to: T, now: Duration, animation: Animation) {
        if to == self.to { return; }
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
        self.animation = animation;
    }

    pub fn value_at(&self, now: Duration) -> T {
        let t = self.animation.progress(now.saturating_sub(self.started_at));
        if t >= 1.0 { self.to } else { self.from.lerp(&self.to, t) }
    }

    pub fn target(&self) -> T { self.to }

    pub fn is_completed(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.animation.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SinIn,
        Easing::SinOut,
        Easing::ExponentialOut,
        Easing::BounceOut,
        Easing::ElasticOut,
        Easing::Ease,
        Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
    ];

    #[test]
    fn easings_hit_both_ends() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
            assert_eq!(e.apply(-3.0), 0.0, "{e:?}");
            assert_eq!(e.apply(7.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn monotonic_easings_stay_in_range() {
        for e in [Easing::Linear, Easing::CubicInOut, Easing::ExponentialOut, Easing::Ease, Easing::SinOut] {
            let mut prev = 0.0;
            for i in 1..100 {
                let v = e.apply(i as f64 / 100.0);
                assert!(v >= prev - 1e-9 && v <= 1.0 + 1e-9, "{e:?} at {i}: {v}");
                prev = v;
            }
        }
    }

    #[test]
    fn linear_cubic_bezier_is_identity() {
        let e = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn motion_moves_from_displayed_value() {
        let anim = Animation::new(Duration::from_millis(100), Easing::Linear);
        let mut m = Motion::new(0.0f64);
        m.set_target(10.0, Duration::ZERO, anim);
        assert_eq!(m.value_at(Duration::from_millis(50)), 5.0);
        assert!(!m.is_completed(Duration::from_millis(50)));

        // retarget halfway: starts from 5, not from 0 or 10
        m.set_target(0.0, Duration::from_millis(50), anim);
        assert_eq!(m.value_at(Duration::from_millis(50)), 5.0);
        assert_eq!(m.value_at(Duration::from_millis(100)), 2.5);
        assert_eq!(m.value_at(Duration::from_millis(150)), 0.0);
        assert!(m.is_completed(Duration::from_millis(150)));
    }

    #[test]
    fn same_target_does_not_restart() {
        let anim = Animation::new(Duration::from_millis(100), Easing::Linear);
        let mut m = Motion::new(0.0f64);
        m.set_target(10.0, Duration::ZERO, anim);
        m.set_target(10.0, Duration::from_millis(90), anim);
        assert!(m.is_completed(Duration::from_millis(100)));
    }

    #[test]
    fn no_animation_completes_immediately() {
        let mut m = Motion::new(PointGeometry::square(Point::ORIGIN, 0.0));
        let target = PointGeometry::square(Point::new(3.0, 4.0), 10.0);
        m.set_target(target, Duration::from_secs(1), Animation::none());
        assert_eq!(m.value_at(Duration::from_secs(1)), target);
    }

    #[test]
    fn animation_config_round_trips_through_json() {
        let a: Animation = serde_json::from_str(r#"{"duration_ms":250,"easing":"cubic_out"}"#).unwrap();
        assert_eq!(a, Animation::new(Duration::from_millis(250), Easing::CubicOut));
    }
}
