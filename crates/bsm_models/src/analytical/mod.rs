//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Generic over `D: Distribution`**: The normal law is injected, not hard-wired
//! - **Shared intermediates**: `d1`/`d2` are recomputed from the parameter
//!   bundle on every call and never cached

pub mod black_scholes;
pub mod error;
pub mod params;

// Re-export main types at module level
pub use black_scholes::{BlackScholesModel, BlackScholesResults};
pub use error::AnalyticalError;
pub use params::BlackScholesParams;
