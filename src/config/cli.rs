//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Draw a power-law sample
    Sample,
    /// Estimate alpha from a sample file
    Fit,
    /// Plot the CCDF of a sample file
    Ccdf,
    /// Sample, fit and plot in one go
    Demo,
}

/// plfit - power-law sampling, CCDF plotting and exponent fitting
#[derive(Parser, Debug)]
#[command(name = "plfit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run mode (default: demo)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Sampler Options ===
    /// Number of values to draw (e.g., 1000, 100k, 1M)
    #[arg(short = 'n', long)]
    pub size: Option<String>,

    /// Lower bound of the power-law regime
    #[arg(long)]
    pub xmin: Option<f64>,

    /// Scaling exponent (must be > 1)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// RNG seed for reproducible samples
    #[arg(long, env = "PLFIT_SEED")]
    pub seed: Option<u64>,

    // === Estimator Options ===
    /// Lower cutoff for the alpha fit (defaults to --xmin)
    #[arg(long)]
    pub fit_xmin: Option<f64>,

    // === Input/Output Options ===
    /// Sample file to analyze (one value per line, or a JSON array)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Write values / CCDF points to this file (.csv, .json, or text)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Render the CCDF figure to this file (.svg or .png)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Write the figure description as JSON
    #[arg(long)]
    pub figure_json: Option<PathBuf>,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,

    // === Runtime Options ===
    /// Validate configuration and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks what can be judged without the merged configuration;
    /// parameter ranges are checked by [`super::validator`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref size) = self.size {
            super::cli_convert::parse_count(size)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["plfit"]).unwrap();
        assert_eq!(cli.mode, None);
        assert_eq!(cli.size, None);
        assert!(!cli.debug);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_sample_mode() {
        let cli = Cli::try_parse_from([
            "plfit", "--mode", "sample", "-n", "10k", "--xmin", "2", "--alpha", "2.5", "--seed",
            "7", "-o", "out.csv",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(Mode::Sample));
        assert_eq!(cli.size.as_deref(), Some("10k"));
        assert_eq!(cli.xmin, Some(2.0));
        assert_eq!(cli.alpha, Some(2.5));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_size() {
        let cli = Cli::try_parse_from(["plfit", "-n", "lots"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_parse_plot_options() {
        let cli = Cli::try_parse_from([
            "plfit", "--mode", "ccdf", "-i", "data.txt", "--plot", "a.svg", "--figure-json",
            "a.json", "--compact",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(Mode::Ccdf));
        assert_eq!(cli.input, Some(PathBuf::from("data.txt")));
        assert_eq!(cli.plot, Some(PathBuf::from("a.svg")));
        assert_eq!(cli.figure_json, Some(PathBuf::from("a.json")));
        assert!(cli.compact);
    }
}
