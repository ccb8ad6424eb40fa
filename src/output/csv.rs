//! CSV output formatting
//!
//! CSV is the easiest format to load into pandas, R or a spreadsheet. The
//! table written depends on what the report holds:
//!
//! - CCDF points: `x,p` rows
//! - Sample values: a single `value` column
//! - Otherwise the fit: one `xmin,n_tail,alpha,std_err` row

use crate::output::json::JsonReport;
use crate::stats::{AlphaEstimate, Ccdf};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the report's primary table to `path`
pub fn write_report_csv(path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if let Some(ref ccdf) = report.ccdf {
        write_ccdf(&mut writer, ccdf)?;
    } else if let Some(ref values) = report.values {
        write_values(&mut writer, values)?;
    } else if let Some(ref estimate) = report.estimate {
        write_estimate(&mut writer, estimate)?;
    } else {
        anyhow::bail!("nothing to write: report has no values, CCDF, or estimate");
    }

    writer.flush()?;
    Ok(())
}

/// Write one `value` column
pub fn write_values<W: Write>(writer: &mut W, values: &[f64]) -> Result<()> {
    writeln!(writer, "value")?;
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

/// Write `x,p` rows
pub fn write_ccdf<W: Write>(writer: &mut W, ccdf: &Ccdf) -> Result<()> {
    writeln!(writer, "x,p")?;
    for (x, p) in ccdf.points() {
        writeln!(writer, "{},{}", x, p)?;
    }
    Ok(())
}

/// Write a header and a single estimate row
pub fn write_estimate<W: Write>(writer: &mut W, estimate: &AlphaEstimate) -> Result<()> {
    writeln!(writer, "xmin,n_tail,alpha,std_err")?;
    writeln!(
        writer,
        "{},{},{},{}",
        estimate.xmin, estimate.n_tail, estimate.alpha, estimate.std_err
    )?;
    Ok(())
}
