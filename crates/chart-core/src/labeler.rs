// File: crates/chart-core/src/labeler.rs
// Summary: Axis label formatting callbacks.

use std::fmt;
use std::sync::Arc;

use chrono::DateTime;

/// Formats an axis value into label text.
#[derive(Clone)]
pub struct Labeler(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl Labeler {
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Fixed number of decimals.
    pub fn fixed(decimals: usize) -> Self {
        Self::new(move |v| format!("{:.*}", decimals, v))
    }

    /// Value as a percentage, `0.25` -> `25%`.
    pub fn percent() -> Self {
        Self::new(|v| format!("{}%", trim_decimals(v * 100.0, 2)))
    }

    /// Value is unix seconds; formatted with a chrono format string (UTC).
    pub fn date_time(format: impl Into<String>) -> Self {
        let format = format.into();
        Self::new(move |v| match DateTime::from_timestamp(v.floor() as i64, 0) {
            Some(dt) => dt.format(&format).to_string(),
            None => trim_decimals(v, 2),
        })
    }

    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for Labeler {
    /// At most two decimals, trailing zeros removed.
    fn default() -> Self {
        Self::new(|v| trim_decimals(v, 2))
    }
}

impl fmt::Debug for Labeler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Labeler(..)")
    }
}

fn trim_decimals(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.').to_string() } else { s };
    if s == "-0" { "0".to_string() } else { s }
}
