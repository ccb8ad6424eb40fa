//! Sample file reading
//!
//! Accepted layouts:
//!
//! - `.json`: a JSON array of numbers
//! - anything else: one value per line; blank lines and `#` comments are
//!   skipped, and only the first field of a line (split on commas or
//!   whitespace) is used.
//!   A first row without any digits is treated as a CSV header, so files
//!   written by [`crate::output::csv`] read back directly.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a sample from `path`
pub fn read_sample(path: &Path) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sample file: {}", path.display()))?;

    let values = match OutputFormat::from_path(path) {
        OutputFormat::Json => parse_json_sample(&contents),
        OutputFormat::Csv | OutputFormat::Text => parse_text_sample(&contents),
    }
    .with_context(|| format!("Failed to parse sample file: {}", path.display()))?;

    debug!(path = %path.display(), count = values.len(), "read sample");
    Ok(values)
}

/// Parse a JSON array of numbers
pub fn parse_json_sample(contents: &str) -> Result<Vec<f64>> {
    let values: Vec<f64> =
        serde_json::from_str(contents).context("Expected a JSON array of numbers")?;
    Ok(values)
}

/// Parse one value per line
pub fn parse_text_sample(contents: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut seen_row = false;

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let field = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .next()
            .unwrap_or(line);
        match field.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) if !seen_row && is_header(line) => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Invalid value on line {}: {:?}", index + 1, field)
                });
            }
        }
        seen_row = true;
    }

    Ok(values)
}

/// Column names only; a mistyped number like `1.o` still has digits
fn is_header(line: &str) -> bool {
    !line.chars().any(|c| c.is_ascii_digit())
}
