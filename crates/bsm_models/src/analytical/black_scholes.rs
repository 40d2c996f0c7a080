//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! - **Delta**: Call N(d₁), Put −N(−d₁)
//! - **Gamma**: φ(d₁) / (S·σ·√T)
//! - **Vega**: S·φ(d₁)·√T
//! - **Rho**: Call K·T·e^(−rT)·N(d₂), Put −K·T·e^(−rT)·N(−d₂)
//! - **Theta**: −σ·Vega/(2T) − r·Rho/T
//! - **Price**: S·Delta − Rho/T
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! Price is assembled from Delta and Rho rather than from a second pair of
//! CDF evaluations; it equals C = S·N(d₁) − K·e^(−rT)·N(d₂) for calls and
//! P = K·e^(−rT)·N(−d₂) − S·N(−d₁) for puts.
//!
//! ## Degenerate Inputs
//!
//! No input is validated. T = 0 or σ = 0 divide by zero inside d₁/d₂, and
//! S ≤ 0 or K ≤ 0 take the logarithm of a non-positive number. Either way
//! the NaN or infinity flows through every dependent output instead of
//! raising an error.

use bsm_core::math::distributions::{Distribution, NormalDistribution};
use bsm_core::types::OptionType;
use tracing::debug;

use super::params::BlackScholesParams;

/// Price and Greeks of one option, evaluated against one parameter bundle.
///
/// Theta is expressed per year; divide by a day-count convention for a
/// daily figure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholesResults {
    /// Theoretical fair value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t (per year)
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl BlackScholesResults {
    /// Returns true when every output is finite.
    ///
    /// A false result means the request was degenerate (see the module docs).
    pub fn is_finite(&self) -> bool {
        [
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Black-Scholes model for European option pricing.
///
/// Holds only the distribution it is wired to; every operation is a pure
/// function of the parameter bundle and option type, so a single instance
/// can serve any number of concurrent callers.
///
/// # Type Parameters
/// * `D` - Distribution supplying the density and cumulative functions
///   (defaults to [`NormalDistribution`])
///
/// # Examples
/// ```
/// use bsm_core::math::NormalDistribution;
/// use bsm_core::types::OptionType;
/// use bsm_models::analytical::{BlackScholesModel, BlackScholesParams};
///
/// let model = BlackScholesModel::new(NormalDistribution::standard());
/// let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
///
/// let call = model.price(&params, OptionType::Call);
/// let put = model.price(&params, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesModel<D = NormalDistribution> {
    dist: D,
}

impl BlackScholesModel<NormalDistribution> {
    /// Creates a model wired to the standard normal distribution.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            dist: NormalDistribution::standard(),
        }
    }
}

impl<D: Distribution> BlackScholesModel<D> {
    /// Creates a model that evaluates its formulas against `dist`.
    #[inline]
    pub fn new(dist: D) -> Self {
        Self { dist }
    }

    /// Returns the distribution the model is wired to.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.dist
    }

    /// Computes price and all five Greeks for one request.
    ///
    /// Each field is taken from the corresponding accessor, so the bundle is
    /// consistent with calling them one by one.
    ///
    /// # Examples
    /// ```
    /// use bsm_core::types::OptionType;
    /// use bsm_models::analytical::{BlackScholesModel, BlackScholesParams};
    ///
    /// let model = BlackScholesModel::standard();
    /// let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
    /// let results = model.calc(&params, OptionType::Put);
    ///
    /// assert_eq!(results.delta, model.delta(&params, OptionType::Put));
    /// assert!(results.is_finite());
    /// ```
    pub fn calc(&self, params: &BlackScholesParams, option_type: OptionType) -> BlackScholesResults {
        let results = BlackScholesResults {
            price: self.price(params, option_type),
            delta: self.delta(params, option_type),
            gamma: self.gamma(params, option_type),
            theta: self.theta(params, option_type),
            vega: self.vega(params, option_type),
            rho: self.rho(params, option_type),
        };

        if !results.is_finite() {
            debug!(
                strike = params.strike,
                spot = params.spot,
                expiry = params.expiry,
                rate = params.rate,
                volatility = params.volatility,
                option_type = %option_type,
                "Black-Scholes evaluation produced non-finite results"
            );
        }

        results
    }

    /// Computes the option price.
    ///
    /// Price = S·Delta − Rho/T
    #[inline]
    pub fn price(&self, params: &BlackScholesParams, option_type: OptionType) -> f64 {
        params.spot * self.delta(params, option_type) - self.rho(params, option_type) / params.expiry
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁), in (0, 1)
    /// - Put Delta = −N(−d₁), in (−1, 0)
    #[inline]
    pub fn delta(&self, params: &BlackScholesParams, option_type: OptionType) -> f64 {
        let d1 = params.d1();
        match option_type {
            OptionType::Call => self.dist.cdf(d1),
            OptionType::Put => -self.dist.cdf(-d1),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, params: &BlackScholesParams, _option_type: OptionType) -> f64 {
        self.dist.pdf(params.d1()) / (params.spot * params.volatility * params.expiry.sqrt())
    }

    /// Computes Theta (∂V/∂t) per year.
    ///
    /// Theta = −σ·Vega/(2T) − r·Rho/T
    ///
    /// The option type only enters through Rho.
    #[inline]
    pub fn theta(&self, params: &BlackScholesParams, option_type: OptionType) -> f64 {
        -params.volatility * 0.5 * self.vega(params, option_type) / params.expiry
            - params.rate * self.rho(params, option_type) / params.expiry
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self, params: &BlackScholesParams, _option_type: OptionType) -> f64 {
        params.spot * self.dist.pdf(params.d1()) * params.expiry.sqrt()
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(−rT)·N(d₂)
    /// - Put Rho = −K·T·e^(−rT)·N(−d₂)
    #[inline]
    pub fn rho(&self, params: &BlackScholesParams, option_type: OptionType) -> f64 {
        let d2 = params.d2();
        let scale = params.strike * params.expiry * params.discount_factor();
        match option_type {
            OptionType::Call => scale * self.dist.cdf(d2),
            OptionType::Put => -scale * self.dist.cdf(-d2),
        }
    }
}
