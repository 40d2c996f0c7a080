//! Core financial and error types.
//!
//! This module provides:
//! - `option_type`: The call/put tag that selects sign conventions in the pricing formulas
//! - `error`: Structured error types for pricing and distribution construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`PricingError`], [`DistributionError`] from `error`

pub mod error;
pub mod option_type;

// Re-export commonly used types at module level
pub use error::{DistributionError, PricingError};
pub use option_type::OptionType;
