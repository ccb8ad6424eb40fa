//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{convert_mode, parse_count};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(mode) = cli.mode {
        config.mode = convert_mode(mode);
    }

    // Override sampler settings
    if let Some(ref size) = cli.size {
        config.sampler.size = parse_count(size).context("Invalid sample size")?;
    }
    if let Some(xmin) = cli.xmin {
        config.sampler.xmin = xmin;
    }
    if let Some(alpha) = cli.alpha {
        config.sampler.alpha = alpha;
    }
    if cli.seed.is_some() {
        config.sampler.seed = cli.seed;
    }

    // Override estimator cutoff
    if cli.fit_xmin.is_some() {
        config.estimate.xmin = cli.fit_xmin;
    }

    // Override input/output paths
    if let Some(ref input) = cli.input {
        config.output.input = Some(input.clone());
    }
    if let Some(ref output) = cli.output {
        config.output.output = Some(output.clone());
    }
    if let Some(ref plot) = cli.plot {
        config.output.plot = Some(plot.clone());
    }
    if let Some(ref figure_json) = cli.figure_json {
        config.output.figure_json = Some(figure_json.clone());
    }
    if cli.compact {
        config.output.pretty = false;
    }

    Ok(config)
}

/// Build the run configuration: TOML file (if any) overlaid with CLI flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_toml_string_full() {
        let config = parse_toml_string(
            r#"
mode = "sample"

[sampler]
size = 5000
xmin = 2.0
alpha = 2.5
seed = 42

[estimate]
xmin = 3.0

[plot]
width_in = 10.0
y_label = "CCDF"

[output]
output = "sample.csv"
pretty = false
"#,
        )
        .unwrap();

        assert_eq!(config.mode, RunMode::Sample);
        assert_eq!(config.sampler.size, 5000);
        assert_eq!(config.sampler.xmin, 2.0);
        assert_eq!(config.sampler.alpha, 2.5);
        assert_eq!(config.sampler.seed, Some(42));
        assert_eq!(config.estimate.xmin, Some(3.0));
        assert_eq!(config.plot.width_in, 10.0);
        assert_eq!(config.plot.height_in, 6.0);
        assert_eq!(config.plot.y_label, "CCDF");
        assert_eq!(config.output.output, Some(PathBuf::from("sample.csv")));
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_parse_toml_string_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config, Config::default());

        let config = parse_toml_string("[sampler]\nalpha = 3.0\n").unwrap();
        assert_eq!(config.sampler.alpha, 3.0);
        assert_eq!(config.sampler.size, 1);
        assert_eq!(config.sampler.xmin, 1.0);
    }

    #[test]
    fn test_parse_toml_string_invalid() {
        assert!(parse_toml_string("mode = \"bogus\"").is_err());
        assert!(parse_toml_string("[sampler]\nsize = \"many\"").is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sampler]\nsize = 10\nalpha = 2.0").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.sampler.size, 10);
        assert_eq!(config.sampler.alpha, 2.0);

        assert!(parse_toml_file(Path::new("/nonexistent/plfit.toml")).is_err());
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = parse_toml_string("[sampler]\nsize = 10\nxmin = 2.0\nalpha = 2.0").unwrap();
        let cli = Cli::try_parse_from([
            "plfit", "--mode", "fit", "-n", "1k", "--alpha", "3.5", "--fit-xmin", "4", "--compact",
        ])
        .unwrap();

        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.mode, RunMode::Fit);
        assert_eq!(merged.sampler.size, 1000);
        assert_eq!(merged.sampler.xmin, 2.0); // untouched
        assert_eq!(merged.sampler.alpha, 3.5);
        assert_eq!(merged.estimate.xmin, Some(4.0));
        assert!(!merged.output.pretty);
    }

    #[test]
    fn test_load_config_without_file() {
        let cli = Cli::try_parse_from(["plfit", "--xmin", "5"]).unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.mode, RunMode::Demo);
        assert_eq!(config.sampler.xmin, 5.0);
    }
}
