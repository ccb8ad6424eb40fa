//! Empirical complementary cumulative distribution function
//!
//! For a sample of size `n` sorted ascending, the `i`-th value (0-indexed)
//! is paired with the survival probability `(n - i) / n`, so the smallest
//! value gets `1.0` and the largest gets `1/n`.

use crate::error::{PowerLawError, Result};
use serde::{Deserialize, Serialize};

/// Empirical CCDF points
///
/// `x` is ascending and `p` is descending from `1.0` to `1/n`; both have
/// the sample's length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ccdf {
    pub x: Vec<f64>,
    pub p: Vec<f64>,
}

impl Ccdf {
    /// Compute the empirical CCDF of `sample`
    ///
    /// Sorting happens on a copy; the input is left untouched. Fails with
    /// [`PowerLawError::EmptyInput`] when `sample` is empty. Non-positive
    /// values are accepted here even though they cannot be placed on a log axis.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(PowerLawError::EmptyInput);
        }

        let n = sample.len();
        let mut x = sample.to_vec();
        x.sort_by(|a, b| a.total_cmp(b));

        let p = (0..n).map(|i| (n - i) as f64 / n as f64).collect();

        Ok(Self { x, p })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, P(X >= x))` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.p.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccdf_basic() {
        let ccdf = Ccdf::from_sample(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(ccdf.x, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ccdf.p, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_ccdf_unsorted_input_not_mutated() {
        let sample = vec![4.0, 1.0, 3.0, 2.0];
        let ccdf = Ccdf::from_sample(&sample).unwrap();

        assert_eq!(ccdf.x, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sample, vec![4.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_ccdf_duplicates() {
        let ccdf = Ccdf::from_sample(&[5.0, 5.0]).unwrap();
        assert_eq!(ccdf.x, vec![5.0, 5.0]);
        assert_eq!(ccdf.p, vec![1.0, 0.5]);
    }

    #[test]
    fn test_ccdf_single_value() {
        let ccdf = Ccdf::from_sample(&[3.0]).unwrap();
        assert_eq!(ccdf.len(), 1);
        assert_eq!(ccdf.points().collect::<Vec<_>>(), vec![(3.0, 1.0)]);
    }

    #[test]
    fn test_ccdf_empty() {
        assert_eq!(Ccdf::from_sample(&[]), Err(PowerLawError::EmptyInput));
    }

    #[test]
    fn test_ccdf_probabilities_monotonic() {
        let sample: Vec<f64> = (1..=1000).map(|i| ((i * 7919) % 1000 + 1) as f64).collect();
        let ccdf = Ccdf::from_sample(&sample).unwrap();

        assert!(ccdf.x.windows(2).all(|w| w[0] <= w[1]));
        assert!(ccdf.p.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(ccdf.p[0], 1.0);
        assert_eq!(*ccdf.p.last().unwrap(), 1.0 / 1000.0);
    }
}
