//! Error types for plfit
//!
//! Every variant is a precondition violation detected at the point of the
//! offending computation. None of them are recovered internally; the caller
//! always receives an explicit failure instead of a NaN or infinite result.

use thiserror::Error;

/// Library error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PowerLawError {
    /// A distribution or estimator parameter is outside its valid domain
    /// (e.g. `alpha = 1`, `xmin <= 0`, `size = 0`)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An empty sample was given where at least one value is required
    #[error("Empty input: the sample contains no values")]
    EmptyInput,

    /// Too few observations at or above `xmin` to form an estimate
    #[error("Insufficient data: no usable observations at or above xmin = {xmin}")]
    InsufficientData { xmin: f64 },

    /// The rendering backend failed to draw or save a figure
    #[error("Render error: {0}")]
    Render(String),
}

impl PowerLawError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Result type used by the library core
pub type Result<T> = std::result::Result<T, PowerLawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PowerLawError::invalid("alpha must not equal 1");
        assert_eq!(err.to_string(), "Invalid parameter: alpha must not equal 1");

        let err = PowerLawError::InsufficientData { xmin: 2.5 };
        assert!(err.to_string().contains("xmin = 2.5"));

        assert!(PowerLawError::EmptyInput.to_string().starts_with("Empty input"));
    }
}
