// File: crates/chart-core/src/config.rs
// Summary: Serializable chart settings (size, margins, animation, theme, axis limits).

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::axis::{Axis, ScaleKind};
use crate::error::Result;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Limits and scale of one axis as written in a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub name: Option<String>,
    pub min_limit: Option<f64>,
    pub max_limit: Option<f64>,
    pub kind: ScaleKind,
    pub inverted: bool,
    pub min_step: f64,
}

impl AxisConfig {
    /// Apply onto `axis`, keeping fields the config cannot express (labeler, styling).
    pub fn apply(&self, axis: &mut Axis) {
        if self.name.is_some() { axis.name = self.name.clone(); }
        axis.min_limit = self.min_limit;
        axis.max_limit = self.max_limit;
        axis.kind = self.kind;
        axis.inverted = self.inverted;
        axis.min_step = self.min_step;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Fixed margins around the draw margin; `None` measures them from the labels.
    pub margin: Option<Insets>,
    pub animation: Animation,
    pub theme: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: None,
            animation: Animation::default(),
            theme: "dark".to_string(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
