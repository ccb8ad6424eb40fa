//! plfit CLI entry point

use anyhow::{Context, Result};
use plfit::config::{cli::Cli, toml::load_config, validator, Config, RunMode};
use plfit::distribution::random_with_config;
use plfit::output::{self, input::read_sample, json::JsonReport, text};
use plfit::plot::{ccdf_figure, Figure};
use plfit::stats::{fit_alpha, Ccdf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    setup_logging(cli.debug)?;

    println!("plfit v{}", env!("CARGO_PKG_VERSION"));
    println!("Power-law sampling, CCDF plotting and exponent fitting");
    println!();

    cli.validate()?;

    let config = load_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "resolved configuration");

    print_configuration(&config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }
    println!();

    let report = match config.mode {
        RunMode::Sample => run_sample(&config)?,
        RunMode::Fit => run_fit(&config)?,
        RunMode::Ccdf => run_ccdf(&config)?,
        RunMode::Demo => run_demo(&config)?,
    };

    if let Some(ref path) = config.output.output {
        output::write_report(path, &report, config.output.pretty)
            .with_context(|| format!("Failed to write output: {}", path.display()))?;
        info!(path = %path.display(), "wrote results");
    }

    Ok(())
}

fn setup_logging(debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Draw a sample
fn run_sample(config: &Config) -> Result<JsonReport> {
    let values = random_with_config(&config.sampler).context("Sampling failed")?;
    text::print_sample_summary(&values, Some(&config.sampler));

    let mut report = JsonReport::new(config);
    report.values = Some(values);
    Ok(report)
}

/// Fit alpha to the input sample
fn run_fit(config: &Config) -> Result<JsonReport> {
    let values = load_input(config)?;
    text::print_sample_summary(&values, None);

    let xmin = config.estimate.cutoff(&config.sampler);
    let estimate = fit_alpha(&values, xmin).context("Alpha estimation failed")?;
    text::print_estimate(&estimate, values.len());

    let mut report = JsonReport::new(config);
    report.estimate = Some(estimate);
    Ok(report)
}

/// CCDF of the input sample, optionally plotted
fn run_ccdf(config: &Config) -> Result<JsonReport> {
    let values = load_input(config)?;

    let ccdf = Ccdf::from_sample(&values).context("CCDF computation failed")?;
    text::print_ccdf_summary(&ccdf);

    emit_figure(config, ccdf_figure(ccdf.clone(), &config.plot))?;

    let mut report = JsonReport::new(config);
    report.ccdf = Some(ccdf);
    Ok(report)
}

/// Sample, fit the sample back and plot its CCDF
fn run_demo(config: &Config) -> Result<JsonReport> {
    let values = random_with_config(&config.sampler).context("Sampling failed")?;
    text::print_sample_summary(&values, Some(&config.sampler));

    let xmin = config.estimate.cutoff(&config.sampler);
    let estimate = fit_alpha(&values, xmin).context("Alpha estimation failed")?;
    text::print_estimate(&estimate, values.len());

    if config.output.plot.is_some() || config.output.figure_json.is_some() {
        let ccdf = Ccdf::from_sample(&values).context("CCDF computation failed")?;
        emit_figure(config, ccdf_figure(ccdf, &config.plot))?;
    }

    let mut report = JsonReport::new(config);
    report.estimate = Some(estimate);
    report.values = Some(values);
    Ok(report)
}

fn load_input(config: &Config) -> Result<Vec<f64>> {
    let path = config
        .output
        .input
        .as_ref()
        .context("No input sample file given")?;
    read_sample(path)
}

/// Render and/or serialize the figure, as configured
fn emit_figure(config: &Config, figure: Figure) -> Result<()> {
    if let Some(ref path) = config.output.plot {
        figure
            .render(path)
            .with_context(|| format!("Failed to render plot: {}", path.display()))?;
        info!(path = %path.display(), "rendered CCDF plot");
    }

    if let Some(ref path) = config.output.figure_json {
        output::json::write_figure_json(path, &figure, config.output.pretty)?;
        info!(path = %path.display(), "wrote figure description");
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration(config: &Config) {
    println!("Configuration:");
    println!("  Mode: {}", config.mode);

    if config.mode.needs_input() {
        if let Some(ref input) = config.output.input {
            println!("  Input: {}", input.display());
        }
    } else {
        let sampler = &config.sampler;
        println!("  Sample size: {}", sampler.size);
        println!("  xmin: {}", sampler.xmin);
        println!("  alpha: {}", sampler.alpha);
        if let Some(seed) = sampler.seed {
            println!("  Seed: {}", seed);
        }
    }

    if matches!(config.mode, RunMode::Fit | RunMode::Demo) {
        println!("  Fit xmin: {}", config.estimate.cutoff(&config.sampler));
    }

    if let Some(ref output) = config.output.output {
        println!("  Output: {}", output.display());
    }
    if let Some(ref plot) = config.output.plot {
        println!("  Plot: {}", plot.display());
    }
    if let Some(ref figure_json) = config.output.figure_json {
        println!("  Figure JSON: {}", figure_json.display());
    }
}
