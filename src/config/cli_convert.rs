//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::RunMode;
use anyhow::{Context, Result};

/// Parse a count string (e.g., "1000", "100k", "2M") to a number
///
/// Multipliers are decimal: k = 1,000, m = 1,000,000, g = 1,000,000,000.
pub fn parse_count(s: &str) -> Result<usize> {
    let s = s.trim().to_lowercase().replace('_', "");

    let (num_str, multiplier) = if let Some(num) = s.strip_suffix('k') {
        (num, 1_000usize)
    } else if let Some(num) = s.strip_suffix('m') {
        (num, 1_000_000)
    } else if let Some(num) = s.strip_suffix('g') {
        (num, 1_000_000_000)
    } else {
        (s.as_str(), 1)
    };

    let num: usize = num_str
        .parse()
        .with_context(|| format!("Invalid count format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Count too large: {}", s))
}

/// Convert CLI mode to config mode
pub fn convert_mode(mode: cli::Mode) -> RunMode {
    match mode {
        cli::Mode::Sample => RunMode::Sample,
        cli::Mode::Fit => RunMode::Fit,
        cli::Mode::Ccdf => RunMode::Ccdf,
        cli::Mode::Demo => RunMode::Demo,
    }
}
