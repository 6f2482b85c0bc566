// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the measure/draw pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis limits: min {min} must not exceed max {max}")]
    InvalidAxisLimits { min: f64, max: f64 },

    #[error("invalid chart size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("logarithmic axis needs positive bounds, got {min}..{max}")]
    NonPositiveLogBound { min: f64, max: f64 },

    #[error("series index {index} out of range ({len} series)")]
    SeriesIndex { index: usize, len: usize },

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
