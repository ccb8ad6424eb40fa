//! Human-readable text output

use crate::config::SamplerConfig;
use crate::output::json::JsonReport;
use crate::stats::{AlphaEstimate, Ccdf};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Order statistics of a sample, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl SampleSummary {
    /// Summarize `values`, or `None` when empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        Some(Self {
            count: n,
            min: sorted[0],
            median,
            max: sorted[n - 1],
        })
    }
}

fn print_header(title: &str) {
    println!("═══════════════════════════════════════════════════════════");
    println!("{:^59}", title);
    println!("═══════════════════════════════════════════════════════════");
}

/// Print a summary of a drawn or loaded sample
pub fn print_sample_summary(values: &[f64], sampler: Option<&SamplerConfig>) {
    print_header("SAMPLE");

    if let Some(sampler) = sampler {
        println!("Power law:  xmin = {}, alpha = {}", sampler.xmin, sampler.alpha);
        match sampler.seed {
            Some(seed) => println!("Seed:       {}", seed),
            None => println!("Seed:       (entropy)"),
        }
    }

    match SampleSummary::from_values(values) {
        Some(summary) => {
            println!("Count:      {}", format_number(summary.count));
            println!("Min:        {:.6}", summary.min);
            println!("Median:     {:.6}", summary.median);
            println!("Max:        {:.6}", summary.max);
        }
        None => println!("Count:      0"),
    }
    println!();
}

/// Print a fitted exponent
pub fn print_estimate(estimate: &AlphaEstimate, sample_size: usize) {
    print_header("ALPHA ESTIMATE (MLE)");
    println!("xmin:       {}", estimate.xmin);
    println!(
        "Tail size:  {} of {} observations",
        format_number(estimate.n_tail),
        format_number(sample_size)
    );
    println!("alpha:      {:.4} ± {:.4}", estimate.alpha, estimate.std_err);
    println!();
}

/// Print where the CCDF spans
pub fn print_ccdf_summary(ccdf: &Ccdf) {
    print_header("EMPIRICAL CCDF");
    println!("Points:     {}", format_number(ccdf.len()));
    if let (Some(first), Some(last)) = (ccdf.x.first(), ccdf.x.last()) {
        println!("x range:    [{:.6}, {:.6}]", first, last);
    }
    if let Some(p_min) = ccdf.p.last() {
        println!("P range:    [{:.6}, 1]", p_min);
    }
    println!();
}

/// Write the report's primary content as whitespace-separated text
pub fn write_report_text(path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if let Some(ref ccdf) = report.ccdf {
        for (x, p) in ccdf.points() {
            writeln!(writer, "{} {}", x, p)?;
        }
    } else if let Some(ref values) = report.values {
        for value in values {
            writeln!(writer, "{}", value)?;
        }
    } else if let Some(ref estimate) = report.estimate {
        writeln!(writer, "xmin {}", estimate.xmin)?;
        writeln!(writer, "n_tail {}", estimate.n_tail)?;
        writeln!(writer, "alpha {}", estimate.alpha)?;
        writeln!(writer, "std_err {}", estimate.std_err)?;
    } else {
        anyhow::bail!("nothing to write: report has no values, CCDF, or estimate");
    }

    writer.flush()?;
    Ok(())
}

/// Format a count with thousands separators
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::input::read_sample;
    use tempfile::TempDir;

    #[test]
    fn test_sample_summary() {
        let summary = SampleSummary::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.max, 4.0);

        let summary = SampleSummary::from_values(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(summary.median, 3.0);

        assert!(SampleSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_write_report_text_values_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");

        let mut report = JsonReport::new(&Config::default());
        report.values = Some(vec![1.25, 7.0, 2.0]);
        write_report_text(&path, &report).unwrap();

        assert_eq!(read_sample(&path).unwrap(), vec![1.25, 7.0, 2.0]);
    }
}
