//! Per-request market parameters for the Black-Scholes formulas.

use super::error::AnalyticalError;

/// Market observables for a single pricing request.
///
/// All five fields are required together. The model performs no validation:
/// a non-positive strike, spot, expiry or volatility yields non-finite
/// results. Call [`validate`](Self::validate) first to reject such inputs.
///
/// # Examples
/// ```
/// use bsm_models::analytical::BlackScholesParams;
///
/// let params = BlackScholesParams::new(100.0, 105.0, 0.5, 0.03, 0.25);
/// assert!(params.validate().is_ok());
///
/// let degenerate = BlackScholesParams { expiry: 0.0, ..params };
/// assert!(degenerate.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholesParams {
    /// Strike (exercise) price (K)
    pub strike: f64,
    /// Underlying spot price (S)
    pub spot: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    /// Continuously-compounded risk-free rate (r), may be zero or negative
    pub rate: f64,
    /// Annualised volatility of the underlying's returns (σ)
    pub volatility: f64,
}

impl BlackScholesParams {
    /// Creates a parameter bundle. No validation is performed.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `spot` - Underlying spot price (S)
    /// * `expiry` - Time to expiration in years (T)
    /// * `rate` - Risk-free interest rate (r)
    /// * `volatility` - Volatility (σ)
    #[inline]
    pub fn new(strike: f64, spot: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            strike,
            spot,
            expiry,
            rate,
            volatility,
        }
    }

    /// Checks that the bundle describes an economically valid request.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike is not finite and positive
    /// - `AnalyticalError::InvalidSpot` if spot is not finite and positive
    /// - `AnalyticalError::InvalidExpiry` if expiry is not finite and positive
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility is not finite and positive
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        fn positive(x: f64) -> bool {
            x.is_finite() && x > 0.0
        }

        if !positive(self.strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }

        if !positive(self.spot) {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }

        if !positive(self.expiry) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: self.expiry,
            });
        }

        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: self.rate });
        }

        if !positive(self.volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }

        Ok(())
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub(crate) fn d1(&self) -> f64 {
        ((self.spot / self.strike).ln()
            + (self.rate + 0.5 * self.volatility * self.volatility) * self.expiry)
            / (self.volatility * self.expiry.sqrt())
    }

    /// d₂ = (ln(S/K) + (r - σ²/2)T) / (σ√T)
    #[inline]
    pub(crate) fn d2(&self) -> f64 {
        ((self.spot / self.strike).ln()
            + (self.rate - 0.5 * self.volatility * self.volatility) * self.expiry)
            / (self.volatility * self.expiry.sqrt())
    }
}
