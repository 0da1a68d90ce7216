//! Chart geometry builder
//!
//! Maps a numeric series onto a normalized 2D canvas and emits path
//! descriptors for line/area rendering. The core generates geometry; the
//! frontend just renders it, whatever the drawing technology.

use serde::Serialize;
use thiserror::Error;

/// Display ceiling of the reference scale, in series units (thousands)
pub const DEFAULT_SERIES_CEILING: f64 = 150.0;

/// Geometry contract violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A plot needs at least two points to span the x axis
    #[error("series has {len} points, need at least 2")]
    InvalidSeriesLength { len: usize },
}

/// Target canvas dimensions, in abstract units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,

    /// Uniform padding inside the canvas edges
    pub padding: f64,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        // Reference dashboard plot area
        Self {
            width: 800.0,
            height: 250.0,
            padding: 40.0,
        }
    }
}

impl CanvasSpec {
    /// y of the plot baseline (bottom padding line)
    pub fn baseline_y(&self) -> f64 {
        self.height - self.padding
    }
}

/// One plotted point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Normalized plot representation of a series
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartGeometry {
    /// Points in series order
    pub points: Vec<PlotPoint>,

    /// `M .. L ..` descriptor connecting the points in order
    pub line_path: String,

    /// Line path closed down to the baseline and back to the first x,
    /// for fill rendering
    pub area_path: String,
}

impl ChartGeometry {
    /// Build geometry for an ordered series
    ///
    /// Points are spread evenly across the padded width; the y axis is scaled
    /// against `ceiling`. Values above the ceiling are NOT clamped and render
    /// above the padding line, matching the reference visuals.
    pub fn from_series(
        values: &[f64],
        canvas: &CanvasSpec,
        ceiling: f64,
    ) -> Result<Self, GeometryError> {
        if values.len() < 2 {
            return Err(GeometryError::InvalidSeriesLength { len: values.len() });
        }

        let x_span = canvas.width - 2.0 * canvas.padding;
        let y_span = canvas.height - 2.0 * canvas.padding;
        let last_index = (values.len() - 1) as f64;

        // Multiply before dividing, matching the reference evaluation order
        // so coordinates agree bit-for-bit with the original rendering.
        let points: Vec<PlotPoint> = values
            .iter()
            .enumerate()
            .map(|(i, value)| PlotPoint {
                x: canvas.padding + i as f64 * x_span / last_index,
                y: canvas.height - canvas.padding - value * y_span / ceiling,
            })
            .collect();

        let mut line_path = format!("M {},{}", points[0].x, points[0].y);
        for point in &points[1..] {
            line_path.push_str(&format!(" L {},{}", point.x, point.y));
        }

        let baseline = canvas.baseline_y();
        let last = points[points.len() - 1];
        let area_path = format!(
            "{} L {},{} L {},{} Z",
            line_path, last.x, baseline, points[0].x, baseline
        );

        Ok(Self {
            points,
            line_path,
            area_path,
        })
    }
}
