//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter validation failures for the Black-Scholes bundle
//!
//! The pricing formulas never return these; they are produced only by
//! [`BlackScholesParams::validate`](super::BlackScholesParams::validate).

use bsm_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry
/// - `InvalidRate`: Non-finite interest rate (any finite rate is accepted)
/// - `InvalidVolatility`: Non-positive or non-finite volatility
///
/// # Examples
/// ```
/// use bsm_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Invalid interest rate.
    #[error("Invalid interest rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
