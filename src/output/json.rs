//! JSON output formatting
//!
//! One report per run. Sections that a mode does not produce are omitted
//! rather than written as `null`.

use crate::config::{Config, RunMode, SamplerConfig};
use crate::plot::Figure;
use crate::stats::{AlphaEstimate, Ccdf};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonReport {
    /// plfit version that produced the report
    pub version: String,
    /// RFC 3339 UTC timestamp
    pub generated_at: String,
    pub mode: RunMode,
    /// Sampler parameters (sample and demo modes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler: Option<SamplerConfig>,
    /// Sample file the data was read from (fit and ccdf modes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<AlphaEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccdf: Option<Ccdf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl JsonReport {
    /// Start an empty report for `config`'s mode
    pub fn new(config: &Config) -> Self {
        let sampler = if config.mode.needs_input() {
            None
        } else {
            Some(config.sampler.clone())
        };
        let input = config
            .output
            .input
            .as_ref()
            .map(|p| p.display().to_string());

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            mode: config.mode,
            sampler,
            input,
            estimate: None,
            ccdf: None,
            values: None,
        }
    }
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }

    Ok(())
}

/// Write a figure description to file
pub fn write_figure_json(output_path: &Path, figure: &Figure, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, figure)?;
    } else {
        serde_json::to_writer(writer, figure)?;
    }

    Ok(())
}
