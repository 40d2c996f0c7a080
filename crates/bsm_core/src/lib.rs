//! # bsm_core: Mathematical Foundation for Black-Scholes-Merton Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! bsm_core is the bottom layer of the workspace, providing:
//! - The `Distribution` capability and the normal law (`math::distributions`)
//! - The call/put tag shared by every pricing formula (`types::option_type`)
//! - Error types: `PricingError`, `DistributionError` (`types::error`)
//!
//! ## Dependencies
//!
//! Layer 1 has no dependencies on other bsm_* crates:
//! - statrs: Gauss error function for the normal CDF
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_core::math::distributions::{Distribution, NormalDistribution};
//! use bsm_core::types::OptionType;
//!
//! let dist = NormalDistribution::standard();
//! assert_eq!(dist.cdf(0.0), 0.5);
//!
//! let kind: OptionType = "put".parse().unwrap();
//! assert!(kind.is_put());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`, `NormalDistribution` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
