//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Every section has documented defaults so a bare `plfit` run is valid.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub mode: RunMode,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub estimate: EstimateConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What a run does
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Draw a synthetic sample
    Sample,
    /// Estimate alpha from an input sample
    Fit,
    /// Compute and plot the CCDF of an input sample
    Ccdf,
    /// Draw a sample, fit it and plot its CCDF
    #[default]
    Demo,
}

impl RunMode {
    /// Whether this mode reads its sample from `output.input`
    pub fn needs_input(&self) -> bool {
        matches!(self, Self::Fit | Self::Ccdf)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sample => "sample",
            Self::Fit => "fit",
            Self::Ccdf => "ccdf",
            Self::Demo => "demo",
        };
        write!(f, "{}", name)
    }
}

/// Power-law sampler parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplerConfig {
    /// Number of values to draw (default 1)
    #[serde(default = "default_size")]
    pub size: usize,
    /// Lower bound of the power-law regime (default 1.0)
    #[serde(default = "default_xmin")]
    pub xmin: f64,
    /// Scaling exponent, must be > 1 (default 1.5)
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// RNG seed for reproducible samples (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_size() -> usize {
    1
}

fn default_xmin() -> f64 {
    1.0
}

fn default_alpha() -> f64 {
    1.5
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            xmin: default_xmin(),
            alpha: default_alpha(),
            seed: None,
        }
    }
}

/// Alpha estimator parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EstimateConfig {
    /// Lower cutoff for the fit (falls back to the sampler's xmin)
    #[serde(default)]
    pub xmin: Option<f64>,
}

impl EstimateConfig {
    pub fn cutoff(&self, sampler: &SamplerConfig) -> f64 {
        self.xmin.unwrap_or(sampler.xmin)
    }
}

/// CCDF figure layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotConfig {
    /// Figure width in inches
    #[serde(default = "default_width_in")]
    pub width_in: f64,
    /// Figure height in inches
    #[serde(default = "default_height_in")]
    pub height_in: f64,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    /// Axis label font size in points
    #[serde(default = "default_label_font_size")]
    pub label_font_size: u32,
    /// Marker radius in pixels
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

fn default_width_in() -> f64 {
    8.0
}

fn default_height_in() -> f64 {
    6.0
}

fn default_dpi() -> u32 {
    100
}

fn default_x_label() -> String {
    "x".to_string()
}

fn default_y_label() -> String {
    "P(X ≥ x)".to_string()
}

fn default_label_font_size() -> u32 {
    16
}

fn default_marker_size() -> u32 {
    3
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            label_font_size: default_label_font_size(),
            marker_size: default_marker_size(),
        }
    }
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Sample file to analyze (fit and ccdf modes)
    pub input: Option<PathBuf>,
    /// Values or CCDF points output (.csv, .json, or plain text)
    pub output: Option<PathBuf>,
    /// Rendered figure (.svg or .png)
    pub plot: Option<PathBuf>,
    /// Figure description as JSON
    pub figure_json: Option<PathBuf>,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            plot: None,
            figure_json: None,
            pretty: default_pretty(),
        }
    }
}
