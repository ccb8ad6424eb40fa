//! Output formatting
//!
//! Results can be written as plain text, CSV, or JSON. The format is chosen
//! from the output file's extension (`.csv`, `.json`, anything else is text).
//! Human-readable summaries go to stdout through [`text`].

pub mod csv;
pub mod input;
pub mod json;
pub mod text;

use anyhow::Result;
use json::JsonReport;
use std::path::Path;

/// File format for result output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    /// Pick the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Self::Csv,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Write `report` to `path` in the format implied by its extension
pub fn write_report(path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    match OutputFormat::from_path(path) {
        OutputFormat::Csv => csv::write_report_csv(path, report),
        OutputFormat::Json => json::write_json_output(path, report, pretty),
        OutputFormat::Text => text::write_report_text(path, report),
    }
}
