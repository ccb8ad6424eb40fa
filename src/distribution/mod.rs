//! Random distribution implementations
//!
//! This module provides the power-law sampler used to generate synthetic
//! heavy-tailed data.
//!
//! # Distributions
//!
//! - **Power law**: continuous density `p(x) ∝ x^(-alpha)` for `x >= xmin`,
//!   drawn by inverse transform sampling
//!
//! # Example
//!
//! ```
//! use plfit::distribution::{Distribution, power_law::PowerLawDistribution};
//!
//! let mut dist = PowerLawDistribution::with_seed(1.0, 2.5, 42).unwrap();
//! let values = dist.sample(1000);
//! assert!(values.iter().all(|&x| x >= 1.0));
//! ```

/// Distribution trait for value generation
///
/// Implementors own their random source, so each instance produces an
/// independent stream. Seeded constructors make that stream reproducible.
///
/// # Thread Safety
///
/// Distributions must be `Send` to allow transfer between threads. There is
/// no shared mutable state between instances.
pub trait Distribution: Send {
    /// Draw the next value
    fn next_value(&mut self) -> f64;

    /// Draw `size` independent values
    ///
    /// `size = 1` yields a one-element vector.
    fn sample(&mut self, size: usize) -> Vec<f64> {
        (0..size).map(|_| self.next_value()).collect()
    }
}

pub mod power_law;

pub use power_law::{random, random_with_config, PowerLaw, PowerLawDistribution};
