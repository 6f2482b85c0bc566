// File: crates/demo/src/main.rs
// Summary: Demo loads numeric CSV columns as stacked areas, adds a polar line, and runs both charts' animations on a recording surface.

use anyhow::{Context, Result};
use chart_core::{
    Axis, CartesianChart, ChartConfig, FrameState, Labeler, PolarChart, RecordingSurface, Series, SeriesKind,
};
use log::{info, warn};
use std::path::Path;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // demo [values.csv] [config.json]
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.get(1) {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading config '{p}'"))?;
            ChartConfig::from_json(&raw).with_context(|| format!("parsing config '{p}'"))?
        }
        None => ChartConfig::default(),
    };

    let columns = match args.first() {
        Some(p) => load_columns(Path::new(p)).with_context(|| format!("failed to load CSV '{p}'"))?,
        None => sample_columns(),
    };
    if columns.is_empty() {
        anyhow::bail!("no numeric columns found; check headers/delimiter.");
    }
    info!("loaded {} series", columns.len());

    // 1) Stacked areas
    let mut chart = CartesianChart::with_config(&config);
    for (name, values) in columns {
        let mut s = Series::new(SeriesKind::StackedArea).named(name).geometry_size(10.0);
        s.set_optional_values(values);
        chart.add_series(s);
    }
    let mut surface = RecordingSurface::new(config.width, config.height);
    let frames = run_frames(&mut surface, |s, now| chart.draw(s, now))?;
    info!(
        "stacked areas settled after {frames} frame(s): x {:?}, y {:?}, draw margin {:?} at {:?}",
        chart.x_limits(),
        chart.y_limits(),
        chart.draw_margin_size(),
        chart.draw_margin_location()
    );
    for (i, s) in chart.series().iter().enumerate() {
        let top = s.points().iter().filter_map(|p| p.stacked_value).map(|v| v.end).fold(0.0, f64::max);
        info!("  series {i} '{}': {} points, stack top {top}", s.name.as_deref().unwrap_or("?"), s.points().len());
    }
    info!("last frame: {} draw commands", surface.commands().len());

    // 2) Polar line
    let mut polar = PolarChart::new(config.width, config.height);
    polar.animation = config.animation;
    let mut radius = Axis::new().labeler(Labeler::new(|v| format!("{:.2}", v * 10.0)));
    radius.labels_angle = -60.0;
    polar.set_radius_axis(radius);
    polar.set_angle_axis(Axis::new().labeler(Labeler::new(|v| format!("{:.2}", v * 1000.0))));
    polar.add_series(Series::polar_line((1..=15).rev().map(|v| v as f64 * 100.0)));

    let mut surface = RecordingSurface::new(config.width, config.height);
    let frames = run_frames(&mut surface, |s, now| polar.draw(s, now))?;
    info!(
        "polar line settled after {frames} frame(s): angle {:?}, radius {:?}",
        polar.angle_limits(),
        polar.radius_limits()
    );
    info!("labels: {}", surface.texts().collect::<Vec<_>>().join(" "));

    Ok(())
}

/// Draw frames until nothing animates; returns the number of frames drawn.
fn run_frames<F>(surface: &mut RecordingSurface, mut draw: F) -> Result<usize>
where
    F: FnMut(&mut RecordingSurface, Duration) -> chart_core::Result<FrameState>,
{
    let mut now = Duration::ZERO;
    for frame in 1..=MAX_FRAMES {
        if !draw(surface, now)?.animating {
            return Ok(frame);
        }
        now += FRAME;
    }
    warn!("still animating after {MAX_FRAMES} frames");
    Ok(MAX_FRAMES)
}

/// Every column with at least one numeric cell becomes a series; other cells are gaps.
fn load_columns(path: &Path) -> Result<Vec<(String, Vec<Option<f64>>)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];

    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in columns.iter_mut().enumerate() {
            col.push(rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()));
        }
    }

    Ok(headers
        .into_iter()
        .zip(columns)
        .filter(|(name, col)| {
            let keep = col.iter().any(Option::is_some);
            if !keep {
                info!("skipping non-numeric column '{name}'");
            }
            keep
        })
        .collect())
}

fn sample_columns() -> Vec<(String, Vec<Option<f64>>)> {
    vec![
        ("online".to_string(), [3.0, 2.0, 3.0, 5.0, 3.0, 4.0, 6.0].map(Some).to_vec()),
        ("retail".to_string(), vec![Some(4.0), Some(2.0), None, Some(5.0), Some(2.0), Some(6.0), Some(3.0)]),
        ("wholesale".to_string(), [3.0, 2.0, 4.0, 2.0, 4.0, 3.0, 2.0].map(Some).to_vec()),
    ]
}
