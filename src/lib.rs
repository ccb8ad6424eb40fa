//! plfit - power-law sampling, CCDF visualization and exponent fitting
//!
//! A small statistics toolkit for heavy-tailed data, following Clauset,
//! Shalizi & Newman (2009), "Power-law distributions in empirical data",
//! SIAM Review 51(4): 661-703.
//!
//! # Architecture
//!
//! - **Sampler**: inverse-transform draws from `p(x) ∝ x^(-alpha)`, `x >= xmin`
//! - **CCDF**: empirical survival function, rendered as a log-log scatter plot
//! - **Estimator**: continuous maximum-likelihood fit of `alpha`
//!
//! The three operations are independent and stateless. Configuration, file
//! input and output, and the `plfit` binary sit on top of them.
//!
//! # Example
//!
//! ```
//! use plfit::config::{PlotConfig, SamplerConfig};
//! use plfit::distribution::random;
//! use plfit::plot::plot_ccdf;
//! use plfit::stats::mle_alpha;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let config = SamplerConfig { size: 10_000, xmin: 1.0, alpha: 2.5, seed: None };
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let sample = random(&config, &mut rng)?;
//!
//! let alpha = mle_alpha(&sample, 1.0)?;
//! assert!((alpha - 2.5).abs() < 0.1);
//!
//! let figure = plot_ccdf(&sample, &PlotConfig::default())?;
//! assert_eq!(figure.axes.series[0].x.len(), 10_000);
//! # Ok::<(), plfit::PowerLawError>(())
//! ```

pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod plot;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use error::{PowerLawError, Result};
