// File: crates/chart-core/src/axis.rs
// Summary: Axis model: limits, scale kind, separators and label formatting.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{ChartError, Result};
use crate::grid::{nice_step_in, separators};
use crate::labeler::Labeler;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Target spacing between separators, in pixels.
const SEPARATOR_SPACING_PX: f64 = 60.0;

#[derive(Clone, Debug)]
pub struct Axis {
    pub name: Option<String>,
    pub min_limit: Option<f64>,
    pub max_limit: Option<f64>,
    pub kind: ScaleKind,
    pub inverted: bool,
    pub labeler: Labeler,
    /// Smallest separator step; 0 lets the axis pick one.
    pub min_step: f64,
    pub labels_rotation: f64,
    /// Polar radial axes: angle (degrees) along which labels are placed.
    pub labels_angle: f64,
    pub text_size: f64,
    pub show_separator_lines: bool,
    pub visible: bool,
    /// Width of one category; data-derived secondary limits are padded by half of it.
    pub unit_width: f64,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            name: None,
            min_limit: None,
            max_limit: None,
            kind: ScaleKind::Linear,
            inverted: false,
            labeler: Labeler::default(),
            min_step: 0.0,
            labels_rotation: 0.0,
            labels_angle: 0.0,
            text_size: 16.0,
            show_separator_lines: true,
            visible: true,
            unit_width: 1.0,
        }
    }
}

impl Axis {
    pub fn new() -> Self { Self::default() }

    /// Axis with fixed limits.
    pub fn with_limits(min: f64, max: f64) -> Self {
        Self { min_limit: Some(min), max_limit: Some(max), ..Self::default() }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn labeler(mut self, labeler: Labeler) -> Self {
        self.labeler = labeler;
        self
    }

    pub fn log10(mut self) -> Self {
        self.kind = ScaleKind::Log10;
        self
    }

    /// Limits used for scaling: explicit limits win, data fills in the rest.
    /// `pad` widens data-derived ends (half a unit on secondary axes).
    pub fn resolve_limits(&self, data: Bounds, pad: f64) -> Result<Bounds> {
        let (data_min, data_max) = if data.is_empty() { (0.0, 1.0) } else { (data.min - pad, data.max + pad) };
        let min = self.min_limit.unwrap_or(data_min);
        let max = self.max_limit.unwrap_or(data_max);
        // an explicit limit on one end can push past the data-derived other end
        let (min, max) = match (self.min_limit, self.max_limit) {
            (Some(_), None) if max < min => (min, min + 1.0),
            (None, Some(_)) if min > max => (max - 1.0, max),
            _ => (min, max),
        };
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(ChartError::InvalidAxisLimits { min, max });
        }
        if self.kind == ScaleKind::Log10 && min <= 0.0 {
            return Err(ChartError::NonPositiveLogBound { min, max });
        }
        Ok(Bounds::new(min, max).non_degenerate())
    }

    /// Separator values inside `limits` for an axis `length_px` long.
    pub fn separators(&self, limits: Bounds, length_px: f64) -> Vec<f64> {
        let count = (length_px / SEPARATOR_SPACING_PX).floor().max(2.0) as usize;
        match self.kind {
            ScaleKind::Linear => separators(limits, nice_step_in(limits, count, self.min_step)),
            ScaleKind::Log10 => {
                // one separator per decade
                let lo = (limits.min.log10() - 1e-9).ceil() as i32;
                let hi = (limits.max.log10() + 1e-9).floor() as i32;
                (lo..=hi).map(|e| 10f64.powi(e)).collect()
            }
        }
    }

    pub fn label(&self, value: f64) -> String {
        self.labeler.format(value)
    }
}
