// File: crates/chart-core/src/bounds.rs
// Summary: Data-space bounds accumulated from series before axis limits are resolved.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds that contain nothing; any `append` replaces both ends.
    pub const fn empty() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max
    }

    /// Grow to include `v`; non-finite values are ignored.
    pub fn append(&mut self, v: f64) {
        if !v.is_finite() { return; }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    pub fn merge(&mut self, other: &Bounds) {
        if other.is_empty() { return; }
        self.append(other.min);
        self.append(other.max);
    }

    pub fn delta(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Widen a zero-length range so scaling never divides by zero.
    pub fn non_degenerate(self) -> Self {
        if self.delta().abs() < 1e-12 { Self::new(self.min, self.min + 1.0) } else { self }
    }
}

impl Default for Bounds {
    fn default() -> Self { Self::empty() }
}

/// Bounds of one series along both chart dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DimensionalBounds {
    /// Along the value axis (Y for cartesian, radius for polar).
    pub primary: Bounds,
    /// Along the category axis (X for cartesian, angle for polar).
    pub secondary: Bounds,
}

impl DimensionalBounds {
    pub fn merge(&mut self, other: &DimensionalBounds) {
        self.primary.merge(&other.primary);
        self.secondary.merge(&other.secondary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_appended() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());
        b.append(f64::NAN);
        assert!(b.is_empty());
        b.append(3.0);
        b.append(-1.0);
        assert_eq!(b, Bounds::new(-1.0, 3.0));
        assert_eq!(b.delta(), 4.0);
    }

    #[test]
    fn merge_ignores_empty() {
        let mut a = Bounds::new(0.0, 1.0);
        a.merge(&Bounds::empty());
        assert_eq!(a, Bounds::new(0.0, 1.0));
        a.merge(&Bounds::new(-2.0, 0.5));
        assert_eq!(a, Bounds::new(-2.0, 1.0));
    }

    #[test]
    fn degenerate_range_is_widened() {
        assert_eq!(Bounds::new(5.0, 5.0).non_degenerate(), Bounds::new(5.0, 6.0));
    }
}
