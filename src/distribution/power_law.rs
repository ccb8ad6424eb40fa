//! Continuous power-law distribution
//!
//! Draws values from the density `p(x) ∝ x^(-alpha)` for `x >= xmin` using
//! inverse transform sampling. Inverting the CDF `F(x) = 1 - (x/xmin)^(1-alpha)`
//! gives
//!
//! ```text
//! x = xmin * (1 - u)^(-1 / (alpha - 1)),   u ~ U[0, 1)
//! ```
//!
//! Since `1 - u` lies in `(0, 1]`, every draw is at least `xmin`. As `u`
//! approaches 1 the draw grows without bound.
//!
//! # Performance
//!
//! O(1) per sample: one uniform draw and one `powf`.
//!
//! # Example
//!
//! ```
//! use plfit::config::SamplerConfig;
//! use plfit::distribution::random;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let config = SamplerConfig { size: 10, xmin: 2.0, alpha: 2.5, seed: None };
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let values = random(&config, &mut rng).unwrap();
//! assert_eq!(values.len(), 10);
//! assert!(values.iter().all(|&x| x >= 2.0));
//! ```

use super::Distribution;
use crate::config::SamplerConfig;
use crate::error::{PowerLawError, Result};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

/// Validated power-law parameters
///
/// Implements [`rand_distr::Distribution`] so it can be driven by any
/// [`Rng`], including `rng.sample_iter(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    xmin: f64,
    alpha: f64,
    /// Pre-computed `-1 / (alpha - 1)`
    exponent: f64,
}

impl PowerLaw {
    /// Create a power law with lower bound `xmin` and scaling exponent `alpha`
    ///
    /// Fails with [`PowerLawError::InvalidParameter`] unless `xmin > 0` and
    /// `alpha > 1` (both finite). `alpha = 1` would divide by zero and
    /// `alpha < 1` gives a density that cannot be normalized.
    pub fn new(xmin: f64, alpha: f64) -> Result<Self> {
        validate_params(xmin, alpha)?;

        Ok(Self {
            xmin,
            alpha,
            exponent: -1.0 / (alpha - 1.0),
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Map a uniform value `u` in `[0, 1)` to a power-law draw
    ///
    /// For `alpha` close to 1 the exponent is large, and `u` near 1 can
    /// overflow to `+inf`. [`random`] reports such draws as errors.
    #[inline(always)]
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        self.xmin * (1.0 - u).powf(self.exponent)
    }
}

impl rand_distr::Distribution<f64> for PowerLaw {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // gen::<f64>() is uniform on [0, 1)
        let u: f64 = rng.gen();
        self.inverse_cdf(u)
    }
}

/// Power-law distribution with its own random source
///
/// Uses the xoshiro256++ PRNG. Seeded instances yield identical sequences.
pub struct PowerLawDistribution {
    law: PowerLaw,
    rng: Xoshiro256PlusPlus,
}

impl PowerLawDistribution {
    /// Create a new power-law distribution with random seed
    pub fn new(xmin: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            law: PowerLaw::new(xmin, alpha)?,
            rng: Xoshiro256PlusPlus::from_entropy(),
        })
    }

    /// Create a new power-law distribution with specific seed
    ///
    /// Useful for reproducible runs and tests.
    pub fn with_seed(xmin: f64, alpha: f64, seed: u64) -> Result<Self> {
        Ok(Self {
            law: PowerLaw::new(xmin, alpha)?,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        })
    }

    pub fn law(&self) -> &PowerLaw {
        &self.law
    }
}

impl Distribution for PowerLawDistribution {
    #[inline(always)]
    fn next_value(&mut self) -> f64 {
        rand_distr::Distribution::sample(&self.law, &mut self.rng)
    }
}

/// Draw `config.size` values from the power law described by `config`
///
/// The random source is injected so callers control reproducibility.
/// `config.seed` is ignored here; see [`random_with_config`].
pub fn random<R: Rng + ?Sized>(config: &SamplerConfig, rng: &mut R) -> Result<Vec<f64>> {
    if config.size == 0 {
        return Err(PowerLawError::invalid("size must be at least 1"));
    }

    let law = PowerLaw::new(config.xmin, config.alpha)?;
    debug!(
        size = config.size,
        xmin = config.xmin,
        alpha = config.alpha,
        "drawing power-law sample"
    );

    let mut values = Vec::with_capacity(config.size);
    for _ in 0..config.size {
        let x = rand_distr::Distribution::sample(&law, &mut *rng);
        if !x.is_finite() {
            return Err(PowerLawError::invalid(format!(
                "draw overflowed f64 (alpha = {} is too close to 1)",
                config.alpha
            )));
        }
        values.push(x);
    }

    Ok(values)
}

/// Draw a sample using a xoshiro256++ generator seeded from `config.seed`,
/// or from system entropy when no seed is set
pub fn random_with_config(config: &SamplerConfig) -> Result<Vec<f64>> {
    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    random(config, &mut rng)
}

fn validate_params(xmin: f64, alpha: f64) -> Result<()> {
    if !xmin.is_finite() || xmin <= 0.0 {
        return Err(PowerLawError::invalid(format!(
            "xmin must be a finite positive number, got {}",
            xmin
        )));
    }

    if !alpha.is_finite() {
        return Err(PowerLawError::invalid(format!(
            "alpha must be finite, got {}",
            alpha
        )));
    }

    if alpha == 1.0 {
        return Err(PowerLawError::invalid(
            "alpha must not equal 1 (the inverse transform is undefined)",
        ));
    }

    if alpha < 1.0 {
        return Err(PowerLawError::invalid(format!(
            "alpha must be greater than 1 for a normalizable power law, got {}",
            alpha
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn config(size: usize, xmin: f64, alpha: f64) -> SamplerConfig {
        SamplerConfig {
            size,
            xmin,
            alpha,
            seed: None,
        }
    }

    #[test]
    fn test_power_law_all_values_above_xmin() {
        for (xmin, alpha) in [(1.0, 1.5), (0.01, 2.0), (3.0, 2.5), (100.0, 4.0)] {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
            let values = random(&config(5000, xmin, alpha), &mut rng).unwrap();

            assert_eq!(values.len(), 5000);
            assert!(values.iter().all(|&x| x >= xmin), "draw below xmin={}", xmin);
        }
    }

    #[test]
    fn test_power_law_single_sample() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let values = random(&SamplerConfig::default(), &mut rng).unwrap();
        assert_eq!(values.len(), 1);
        assert!(values[0] >= 1.0);
    }

    #[test]
    fn test_power_law_inverse_cdf_boundaries() {
        let law = PowerLaw::new(2.0, 3.0).unwrap();

        // u = 0 maps exactly onto xmin
        assert_eq!(law.inverse_cdf(0.0), 2.0);

        // (1 - 0.75)^(-1/2) = 2
        assert!((law.inverse_cdf(0.75) - 4.0).abs() < 1e-12);

        // Output grows without bound as u approaches 1
        assert!(law.inverse_cdf(1.0 - 1e-12) > 1e5);
    }

    #[test]
    fn test_power_law_seeded() {
        let mut dist1 = PowerLawDistribution::with_seed(1.0, 2.5, 12345).unwrap();
        let mut dist2 = PowerLawDistribution::with_seed(1.0, 2.5, 12345).unwrap();

        // Same seed should produce same sequence
        assert_eq!(dist1.sample(100), dist2.sample(100));
    }

    #[test]
    fn test_random_with_config_seeded() {
        let mut cfg = config(50, 1.0, 2.0);
        cfg.seed = Some(7);

        let a = random_with_config(&cfg).unwrap();
        let b = random_with_config(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_power_law_matches_pareto_median() {
        // A power law with exponent alpha is a Pareto with shape alpha - 1,
        // whose median is xmin * 2^(1/(alpha - 1)).
        let mut dist = PowerLawDistribution::with_seed(1.0, 3.0, 2024).unwrap();
        let mut values = dist.sample(50_000);
        values.sort_by(|a, b| a.total_cmp(b));

        let median = values[values.len() / 2];
        let expected = 2f64.sqrt();
        assert!(
            (median - expected).abs() / expected < 0.02,
            "median {} too far from {}",
            median,
            expected
        );
    }

    #[test]
    fn test_power_law_invalid_alpha_one() {
        let err = PowerLaw::new(1.0, 1.0).unwrap_err();
        assert!(matches!(err, PowerLawError::InvalidParameter(_)));
    }

    #[test]
    fn test_power_law_invalid_params() {
        assert!(PowerLaw::new(1.0, 0.5).is_err());
        assert!(PowerLaw::new(1.0, f64::NAN).is_err());
        assert!(PowerLaw::new(0.0, 2.0).is_err());
        assert!(PowerLaw::new(-1.0, 2.0).is_err());
        assert!(PowerLaw::new(f64::INFINITY, 2.0).is_err());
        assert!(PowerLawDistribution::new(1.0, 1.0).is_err());
    }

    #[test]
    fn test_random_rejects_overflowing_draw() {
        // Every u64 is MAX, so gen::<f64>() returns 1 - 2^-53
        let mut rng = StepRng::new(u64::MAX, 0);
        let err = random(&config(10, 1.0, 1.01), &mut rng).unwrap_err();
        assert!(matches!(err, PowerLawError::InvalidParameter(_)));

        // Same u stays finite for a moderate exponent
        let mut rng = StepRng::new(u64::MAX, 0);
        let values = random(&config(3, 1.0, 1.5), &mut rng).unwrap();
        assert!(values.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_random_zero_size() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let err = random(&config(0, 1.0, 2.0), &mut rng).unwrap_err();
        assert!(matches!(err, PowerLawError::InvalidParameter(_)));
    }
}
