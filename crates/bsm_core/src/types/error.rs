//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced at the edges of a pricing request
//! - `DistributionError`: Errors from distribution construction
//!
//! The pricing formulas themselves never return these: degenerate inputs
//! propagate as non-finite floating-point values. Only constructors and
//! explicit validation are fallible.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced non-finite values
///
/// # Examples
/// ```
/// use bsm_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Distribution construction errors.
///
/// # Examples
/// ```
/// use bsm_core::types::DistributionError;
///
/// let err = DistributionError::InvalidStdDev { std_dev: -1.0 };
/// assert!(format!("{}", err).contains("standard deviation"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Mean is NaN or infinite.
    #[error("Invalid mean: μ = {mean}")]
    InvalidMean {
        /// The invalid mean
        mean: f64,
    },

    /// Standard deviation is non-positive, NaN or infinite.
    #[error("Invalid standard deviation: σ = {std_dev}")]
    InvalidStdDev {
        /// The invalid standard deviation
        std_dev: f64,
    },
}

impl From<DistributionError> for PricingError {
    fn from(err: DistributionError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::InvalidInput("bad strike".to_string()).to_string(),
            "Invalid input: bad strike"
        );
        assert_eq!(
            PricingError::NumericalInstability("NaN price".to_string()).to_string(),
            "Numerical instability: NaN price"
        );
    }

    #[test]
    fn test_distribution_error_display() {
        let err = DistributionError::InvalidStdDev { std_dev: 0.0 };
        assert_eq!(err.to_string(), "Invalid standard deviation: σ = 0");

        let err = DistributionError::InvalidMean { mean: f64::INFINITY };
        assert_eq!(err.to_string(), "Invalid mean: μ = inf");
    }

    #[test]
    fn test_distribution_error_to_pricing_error() {
        let err = DistributionError::InvalidStdDev { std_dev: -2.0 };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("-2")),
            other => panic!("Expected InvalidInput variant, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NumericalInstability("x".to_string());
        let _: &dyn std::error::Error = &err;
        let err = DistributionError::InvalidMean { mean: f64::NAN };
        let _: &dyn std::error::Error = &err;
    }
}
