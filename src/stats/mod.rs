//! Sample statistics
//!
//! Pure computations over a sample of observations. Nothing in this module
//! mutates its input or keeps state between calls, so every function is safe
//! to call concurrently from multiple threads.
//!
//! - **CCDF**: empirical survival function `P(X >= x)` of a sample
//! - **Estimation**: maximum-likelihood fit of the power-law exponent
//!
//! # Example
//!
//! ```
//! use plfit::stats::{Ccdf, mle_alpha};
//!
//! let sample = [1.0, 2.0, 4.0, 8.0];
//!
//! let ccdf = Ccdf::from_sample(&sample).unwrap();
//! assert_eq!(ccdf.p, vec![1.0, 0.75, 0.5, 0.25]);
//!
//! let alpha = mle_alpha(&sample, 1.0).unwrap();
//! assert!((alpha - 1.962).abs() < 1e-3);
//! ```

pub mod ccdf;
pub mod estimate;

pub use ccdf::Ccdf;
pub use estimate::{fit_alpha, mle_alpha, AlphaEstimate};
