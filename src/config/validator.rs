//! Configuration validation

use super::*;
use crate::plot::render::ImageFormat;
use anyhow::{Context, Result};

/// Largest sample the CLI will draw in one run
const MAX_SAMPLE_SIZE: usize = 100_000_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sampler(&config.sampler)?;
    validate_estimate(&config.estimate)?;
    validate_plot(&config.plot)?;
    validate_output(config.mode, &config.output)?;

    Ok(())
}

/// Validate sampler parameters
pub fn validate_sampler(sampler: &SamplerConfig) -> Result<()> {
    if sampler.size == 0 {
        anyhow::bail!("sample size must be at least 1");
    }

    if sampler.size > MAX_SAMPLE_SIZE {
        anyhow::bail!(
            "sample size must be at most {}, got {}",
            MAX_SAMPLE_SIZE,
            sampler.size
        );
    }

    if !sampler.xmin.is_finite() || sampler.xmin <= 0.0 {
        anyhow::bail!("xmin must be a finite positive number, got {}", sampler.xmin);
    }

    if !sampler.alpha.is_finite() || sampler.alpha <= 1.0 {
        anyhow::bail!("alpha must be greater than 1, got {}", sampler.alpha);
    }

    Ok(())
}

/// Validate estimator parameters
pub fn validate_estimate(estimate: &EstimateConfig) -> Result<()> {
    if let Some(xmin) = estimate.xmin {
        if !xmin.is_finite() || xmin <= 0.0 {
            anyhow::bail!("fit xmin must be a finite positive number, got {}", xmin);
        }
    }

    Ok(())
}

/// Validate plot layout
pub fn validate_plot(plot: &PlotConfig) -> Result<()> {
    if !(plot.width_in > 0.0 && plot.width_in <= 100.0) {
        anyhow::bail!("plot width must be in (0, 100] inches, got {}", plot.width_in);
    }

    if !(plot.height_in > 0.0 && plot.height_in <= 100.0) {
        anyhow::bail!("plot height must be in (0, 100] inches, got {}", plot.height_in);
    }

    if plot.dpi == 0 || plot.dpi > 1200 {
        anyhow::bail!("dpi must be between 1 and 1200, got {}", plot.dpi);
    }

    if plot.label_font_size == 0 {
        anyhow::bail!("label_font_size must be at least 1");
    }

    if plot.marker_size == 0 {
        anyhow::bail!("marker_size must be at least 1");
    }

    Ok(())
}

/// Validate input/output locations against the run mode
pub fn validate_output(mode: RunMode, output: &OutputConfig) -> Result<()> {
    if mode.needs_input() && output.input.is_none() {
        anyhow::bail!("{} mode requires an input sample file (--input)", mode);
    }

    if !mode.needs_input() && output.input.is_some() {
        anyhow::bail!("{} mode draws its own sample; --input is not used", mode);
    }

    if let Some(ref input) = output.input {
        if !input.is_file() {
            anyhow::bail!("input file does not exist: {}", input.display());
        }
    }

    let wants_figure = output.plot.is_some() || output.figure_json.is_some();
    if wants_figure && matches!(mode, RunMode::Sample | RunMode::Fit) {
        anyhow::bail!("{} mode does not produce a figure (use ccdf or demo)", mode);
    }

    if let Some(ref plot) = output.plot {
        ImageFormat::from_path(plot).context("Invalid plot output path")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_sampler() {
        let mut sampler = SamplerConfig::default();
        assert!(validate_sampler(&sampler).is_ok());

        sampler.alpha = 1.0;
        assert!(validate_sampler(&sampler).is_err());

        sampler.alpha = 0.5;
        assert!(validate_sampler(&sampler).is_err());

        sampler.alpha = 2.0;
        sampler.xmin = 0.0;
        assert!(validate_sampler(&sampler).is_err());

        sampler.xmin = 1.0;
        sampler.size = 0;
        assert!(validate_sampler(&sampler).is_err());

        sampler.size = MAX_SAMPLE_SIZE + 1;
        assert!(validate_sampler(&sampler).is_err());
    }

    #[test]
    fn test_validate_estimate() {
        assert!(validate_estimate(&EstimateConfig { xmin: None }).is_ok());
        assert!(validate_estimate(&EstimateConfig { xmin: Some(0.5) }).is_ok());
        assert!(validate_estimate(&EstimateConfig { xmin: Some(-1.0) }).is_err());
        assert!(validate_estimate(&EstimateConfig { xmin: Some(f64::NAN) }).is_err());
    }

    #[test]
    fn test_validate_plot() {
        let mut plot = PlotConfig::default();
        assert!(validate_plot(&plot).is_ok());

        plot.dpi = 0;
        assert!(validate_plot(&plot).is_err());

        plot.dpi = 100;
        plot.width_in = -2.0;
        assert!(validate_plot(&plot).is_err());
    }

    #[test]
    fn test_validate_output_requires_input() {
        let output = OutputConfig::default();
        assert!(validate_output(RunMode::Fit, &output).is_err());
        assert!(validate_output(RunMode::Ccdf, &output).is_err());
        assert!(validate_output(RunMode::Sample, &output).is_ok());

        let input = NamedTempFile::new().unwrap();
        let output = OutputConfig {
            input: Some(input.path().to_path_buf()),
            ..Default::default()
        };
        assert!(validate_output(RunMode::Fit, &output).is_ok());
        assert!(validate_output(RunMode::Demo, &output).is_err());
    }

    #[test]
    fn test_validate_output_plot_format() {
        let mut output = OutputConfig {
            plot: Some(PathBuf::from("ccdf.svg")),
            ..Default::default()
        };
        assert!(validate_output(RunMode::Demo, &output).is_ok());

        output.plot = Some(PathBuf::from("ccdf.pdf"));
        assert!(validate_output(RunMode::Demo, &output).is_err());
    }

    #[test]
    fn test_validate_output_figure_modes() {
        let output = OutputConfig {
            figure_json: Some(PathBuf::from("figure.json")),
            ..Default::default()
        };
        assert!(validate_output(RunMode::Sample, &output).is_err());
        assert!(validate_output(RunMode::Demo, &output).is_ok());
    }

    #[test]
    fn test_validate_output_missing_input_file() {
        let output = OutputConfig {
            input: Some(PathBuf::from("/nonexistent/sample.txt")),
            ..Default::default()
        };
        assert!(validate_output(RunMode::Ccdf, &output).is_err());
    }
}
