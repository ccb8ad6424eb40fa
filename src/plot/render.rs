//! Figure rendering on the `plotters` crate
//!
//! Supports SVG and PNG output, selected by file extension. Only log-log
//! axes are supported, and every point must be strictly positive.

use super::{AxisScale, FillStyle, Figure};
use crate::error::{PowerLawError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// Padding factor applied around the data range on each log axis
const LOG_PADDING: f64 = 1.5;

/// Output format for a rendered figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Pick the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(PowerLawError::Render(format!(
                "unsupported image format for {} (expected .svg or .png)",
                path.display()
            ))),
        }
    }
}

impl Figure {
    /// Render to `path`, choosing SVG or PNG from its extension
    pub fn render(&self, path: &Path) -> Result<()> {
        match ImageFormat::from_path(path)? {
            ImageFormat::Svg => self.render_svg(path),
            ImageFormat::Png => self.render_png(path),
        }
    }

    pub fn render_svg(&self, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, self.pixel_size()).into_drawing_area();
        draw_figure(self, root)?;
        debug!(path = %path.display(), "rendered SVG figure");
        Ok(())
    }

    pub fn render_png(&self, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, self.pixel_size()).into_drawing_area();
        draw_figure(self, root)?;
        debug!(path = %path.display(), "rendered PNG figure");
        Ok(())
    }
}

/// Axis range `(x_lo..x_hi, y_lo..y_hi)` covering every point of the figure
fn log_ranges(figure: &Figure) -> Result<(std::ops::Range<f64>, std::ops::Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (x, y) in figure.axes.series.iter().flat_map(|s| s.points()) {
        if !(x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()) {
            return Err(PowerLawError::Render(format!(
                "point ({}, {}) cannot be placed on log-log axes",
                x, y
            )));
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min > x_max {
        return Err(PowerLawError::Render("figure has no points to draw".to_string()));
    }

    Ok((
        (x_min / LOG_PADDING)..(x_max * LOG_PADDING),
        (y_min / LOG_PADDING)..(y_max * LOG_PADDING),
    ))
}

fn draw_figure<DB: DrawingBackend>(figure: &Figure, root: DrawingArea<DB, Shift>) -> Result<()> {
    let axes = &figure.axes;
    if axes.x_scale != AxisScale::Log || axes.y_scale != AxisScale::Log {
        return Err(PowerLawError::Render(
            "only log-log axes can be rendered".to_string(),
        ));
    }

    let (x_range, y_range) = log_ranges(figure)?;

    root.fill(&WHITE)
        .map_err(|e| PowerLawError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
        .map_err(|e| PowerLawError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(axes.x_label.as_str())
        .y_desc(axes.y_label.as_str())
        .axis_desc_style(("sans-serif", axes.label_font_size))
        .label_style(("sans-serif", 12))
        .x_label_formatter(&|x| format!("{:.0e}", x))
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .draw()
        .map_err(|e| PowerLawError::Render(e.to_string()))?;

    for series in &axes.series {
        let (radius, fill) = (series.marker_size, series.fill);

        chart
            .draw_series(
                series
                    .points()
                    .map(move |point| Circle::new(point, radius, marker_style(fill))),
            )
            .map_err(|e| PowerLawError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PowerLawError::Render(e.to_string()))?;

    Ok(())
}

fn marker_style(fill: FillStyle) -> ShapeStyle {
    match fill {
        FillStyle::None => BLUE.stroke_width(1),
        FillStyle::Full => BLUE.filled(),
    }
}
