// File: crates/chart-core/src/stacking.rs
// Summary: Running totals per stack group and secondary value, shared by stacked series.

use std::collections::HashMap;

/// Where one sample sits inside its stack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StackedValue {
    pub start: f64,
    pub end: f64,
    /// Sum of all same-signed values stacked at this secondary value.
    pub total: f64,
}

impl StackedValue {
    /// Fraction of the stack this sample occupies.
    pub fn share(&self) -> f64 {
        if self.total == 0.0 { 0.0 } else { (self.end - self.start) / self.total }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Totals {
    positive: f64,
    negative: f64,
}

#[derive(Default, Debug)]
struct StackGroup {
    // series registered so far, in order
    positions: usize,
    totals: HashMap<u64, Totals>,
    // (position, secondary key) -> stacked value, filled by `stack`
    values: HashMap<(usize, u64), StackedValue>,
}

/// Stacking accumulator for one redraw cycle.
///
/// Series register in draw order, then stack their samples; positive values
/// pile up on the positive running total and negative values on the negative
/// one, per secondary value.
#[derive(Default, Debug)]
pub struct Stacker {
    groups: HashMap<i32, StackGroup>,
}

/// Hash key for a secondary value; `-0.0` and `0.0` share a key.
fn key(secondary: f64) -> u64 {
    if secondary == 0.0 { 0.0f64.to_bits() } else { secondary.to_bits() }
}

impl Stacker {
    pub fn new() -> Self { Self::default() }

    /// Forget every group; called at the start of a redraw cycle.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Register a series in `group`, returning its position inside the stack.
    pub fn position_for(&mut self, group: i32) -> usize {
        let g = self.groups.entry(group).or_default();
        g.positions += 1;
        g.positions - 1
    }

    /// Stack `value` for the series at `position`; empty samples stack as 0.
    pub fn stack(&mut self, group: i32, position: usize, secondary: f64, value: f64) -> StackedValue {
        let value = if value.is_finite() { value } else { 0.0 };
        let g = self.groups.entry(group).or_default();
        let k = key(secondary);
        let totals = g.totals.entry(k).or_default();
        let stacked = if value >= 0.0 {
            let start = totals.positive;
            totals.positive += value;
            StackedValue { start, end: totals.positive, total: 0.0 }
        } else {
            let start = totals.negative;
            totals.negative += value;
            StackedValue { start, end: totals.negative, total: 0.0 }
        };
        g.values.insert((position, k), stacked);
        stacked
    }

    /// Stacked value with `total` filled in, once every series has stacked.
    pub fn get(&self, group: i32, position: usize, secondary: f64) -> Option<StackedValue> {
        let g = self.groups.get(&group)?;
        let k = key(secondary);
        let mut v = *g.values.get(&(position, k))?;
        let totals = g.totals.get(&k).copied().unwrap_or_default();
        v.total = if v.end >= v.start { totals.positive } else { totals.negative };
        Some(v)
    }

    /// Largest positive and smallest negative running totals of a group.
    pub fn extremes(&self, group: i32) -> Option<(f64, f64)> {
        let g = self.groups.get(&group)?;
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for t in g.totals.values() {
            lo = lo.min(t.negative);
            hi = hi.max(t.positive);
        }
        Some((lo, hi))
    }
}
