// File: crates/chart-core/src/grid.rs
// Summary: Separator (tick) layout helpers.

use crate::bounds::Bounds;

/// Separator lists longer than this collapse to the two limits.
pub const MAX_SEPARATORS: usize = 10_000;

/// A "nice" step (1, 2 or 5 times a power of ten) that splits `range` into at
/// most roughly `max_separators` parts. `min_step` is a floor.
pub fn nice_step(range: f64, max_separators: usize, min_step: f64) -> f64 {
    if !(range.is_finite() && range > 0.0) { return min_step.max(1.0); }
    nice_minimum(range / max_separators.max(1) as f64, min_step)
}

/// Like `nice_step` over `limits`, for ranges wider than `f64::MAX` too.
pub fn nice_step_in(limits: Bounds, max_separators: usize, min_step: f64) -> f64 {
    let half = limits.max / 2.0 - limits.min / 2.0;
    if !(half.is_finite() && half > 0.0) { return min_step.max(1.0); }
    nice_minimum(half / max_separators.max(1) as f64 * 2.0, min_step)
}

fn nice_minimum(minimum: f64, min_step: f64) -> f64 {
    let magnitude = 10f64.powf(minimum.log10().floor());
    let residual = minimum / magnitude;
    let tick = if residual > 5.0 {
        10.0 * magnitude
    } else if residual > 2.0 {
        5.0 * magnitude
    } else if residual > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    };
    let tick = if tick.is_finite() { tick } else { magnitude };
    tick.max(min_step)
}

/// Multiples of `step` inside `limits`.
pub fn separators(limits: Bounds, step: f64) -> Vec<f64> {
    if limits.is_empty() || !(step.is_finite() && step > 0.0) { return Vec::new(); }
    let first = (limits.min / step).ceil() * step;
    let count = (limits.max / step - first / step + 1e-9).floor();
    if count < 0.0 { return Vec::new(); }
    if !(count < MAX_SEPARATORS as f64) { return vec![limits.min, limits.max]; }
    (0..=count as usize)
        .map(|i| first + step * i as f64)
        // kill float noise such as 0.30000000000000004
        .map(|v| (v / step).round() * step)
        .collect()
}
