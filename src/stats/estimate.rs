//! Maximum-likelihood estimation of the power-law exponent
//!
//! Continuous estimator from Clauset, Shalizi & Newman (2009), "Power-law
//! distributions in empirical data", SIAM Review 51(4):
//!
//! ```text
//! alpha = 1 + n / sum(ln(x_i / xmin))      over x_i >= xmin
//! sigma = (alpha - 1) / sqrt(n)
//! ```

use crate::error::{PowerLawError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fitted exponent together with its tail statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaEstimate {
    /// Estimated scaling exponent
    pub alpha: f64,
    /// Asymptotic standard error of `alpha`
    pub std_err: f64,
    /// Number of observations at or above `xmin`
    pub n_tail: usize,
    /// Lower cutoff used for the fit
    pub xmin: f64,
}

/// Maximum-likelihood estimate of `alpha` for observations `>= xmin`
///
/// Values below `xmin` are dropped before any logarithm is taken, so they
/// never influence the result (and never reach `ln` when non-positive).
///
/// # Errors
///
/// - [`PowerLawError::InvalidParameter`] if `xmin` is not finite and positive
/// - [`PowerLawError::InsufficientData`] if no observation is `>= xmin`, or
///   every such observation equals `xmin` (the estimate would be infinite)
pub fn mle_alpha(sample: &[f64], xmin: f64) -> Result<f64> {
    fit_alpha(sample, xmin).map(|fit| fit.alpha)
}

/// Like [`mle_alpha`], also reporting the standard error and tail size
pub fn fit_alpha(sample: &[f64], xmin: f64) -> Result<AlphaEstimate> {
    if !xmin.is_finite() || xmin <= 0.0 {
        return Err(PowerLawError::invalid(format!(
            "xmin must be a finite positive number, got {}",
            xmin
        )));
    }

    let (n_tail, log_sum) = sample
        .iter()
        .filter(|&&x| x >= xmin)
        .fold((0usize, 0.0f64), |(n, sum), &x| (n + 1, sum + (x / xmin).ln()));

    if n_tail == 0 || log_sum <= 0.0 {
        return Err(PowerLawError::InsufficientData { xmin });
    }

    let n = n_tail as f64;
    let alpha = 1.0 + n / log_sum;
    let std_err = (alpha - 1.0) / n.sqrt();

    debug!(n_tail, xmin, alpha, std_err, "fitted power-law exponent");

    Ok(AlphaEstimate {
        alpha,
        std_err,
        n_tail,
        xmin,
    })
}
