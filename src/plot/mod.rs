//! Plot descriptions
//!
//! A [`Figure`] is a plain value describing what to draw: figure size, axis
//! scales and labels, and the scatter series. Building one has no side
//! effects; the caller decides whether to render it (see [`render`]),
//! serialize it, or drop it.
//!
//! # Example
//!
//! ```
//! use plfit::config::PlotConfig;
//! use plfit::plot::{plot_ccdf, AxisScale};
//!
//! let figure = plot_ccdf(&[1.0, 2.0, 3.0, 4.0], &PlotConfig::default()).unwrap();
//! assert_eq!(figure.axes.x_scale, AxisScale::Log);
//! assert_eq!(figure.axes.series[0].y, vec![1.0, 0.75, 0.5, 0.25]);
//! ```

pub mod render;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::stats::Ccdf;
use serde::{Deserialize, Serialize};

/// Axis scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

/// Marker shape for scatter series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Circle,
}

/// Marker fill style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    /// Outline only
    None,
    Full,
}

/// One scatter series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker: Marker,
    pub fill: FillStyle,
    /// Marker radius in pixels
    pub marker_size: u32,
}

impl ScatterSeries {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A single set of axes with its series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_label: String,
    pub y_label: String,
    /// Axis label font size in points
    pub label_font_size: u32,
    pub series: Vec<ScatterSeries>,
}

/// A renderable figure with one set of axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Width in inches
    pub width_in: f64,
    /// Height in inches
    pub height_in: f64,
    /// Pixels per inch used by raster and vector backends
    pub dpi: u32,
    pub axes: Axes,
}

impl Figure {
    /// Pixel dimensions `(width, height)` at the figure's dpi
    pub fn pixel_size(&self) -> (u32, u32) {
        let w = (self.width_in * self.dpi as f64).round().max(1.0) as u32;
        let h = (self.height_in * self.dpi as f64).round().max(1.0) as u32;
        (w, h)
    }
}

/// Build a log-log scatter figure of the empirical CCDF of `sample`
///
/// The x axis is labeled with the variable and the y axis with the tail
/// probability `P(X ≥ x)`; points are drawn as unfilled circles.
///
/// Fails with [`crate::PowerLawError::EmptyInput`] for an empty sample.
pub fn plot_ccdf(sample: &[f64], config: &PlotConfig) -> Result<Figure> {
    let ccdf = Ccdf::from_sample(sample)?;
    Ok(ccdf_figure(ccdf, config))
}

/// Build the CCDF figure from pre-computed points
pub fn ccdf_figure(ccdf: Ccdf, config: &PlotConfig) -> Figure {
    Figure {
        width_in: config.width_in,
        height_in: config.height_in,
        dpi: config.dpi,
        axes: Axes {
            x_scale: AxisScale::Log,
            y_scale: AxisScale::Log,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            label_font_size: config.label_font_size,
            series: vec![ScatterSeries {
                x: ccdf.x,
                y: ccdf.p,
                marker: Marker::Circle,
                fill: FillStyle::None,
                marker_size: config.marker_size,
            }],
        },
    }
}
