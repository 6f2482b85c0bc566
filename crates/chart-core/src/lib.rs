// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart computation pipeline and the drawing-surface seam.

pub mod error;
pub mod types;
pub mod geometry;
pub mod bounds;
pub mod scale;
pub mod grid;
pub mod labeler;
pub mod axis;
pub mod stacking;
pub mod bezier;
pub mod animation;
pub mod theme;
pub mod surface;
pub mod series;
pub mod materialize;
pub mod config;
pub mod chart;
pub mod polar;

pub use animation::{Animatable, Animation, Easing, Motion};
pub use axis::{Axis, ScaleKind};
pub use bounds::{Bounds, DimensionalBounds};
pub use chart::{CartesianChart, FrameState};
pub use config::{AxisConfig, ChartConfig};
pub use error::{ChartError, Result};
pub use geometry::{BezPath, BezierSegment, Point, PointGeometry, Rect, Size};
pub use labeler::Labeler;
pub use polar::PolarChart;
pub use scale::{Orientation, PolarRange, PolarScaler, Scaler};
pub use series::{ChartPoint, DataPoint, Series, SeriesKind, SeriesPaths};
pub use stacking::{StackedValue, Stacker};
pub use surface::{DrawCommand, DrawingSurface, GeometryStyle, RecordingSurface, Stroke, TextAlign, TextStyle};
pub use theme::Theme;
pub use types::{Color, Insets};
