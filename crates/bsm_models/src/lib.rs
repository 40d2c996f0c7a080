//! # bsm_models (L2: Pricing Models)
//!
//! Closed-form pricing of European options under Black-Scholes-Merton.
//!
//! This crate provides:
//! - The per-request parameter bundle (`BlackScholesParams`)
//! - The analytical model, generic over the distribution it is wired to
//!   (`BlackScholesModel`)
//! - The aggregate price-and-greeks bundle (`BlackScholesResults`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: every operation depends only on its inputs and the
//!   stateless distribution, so one model may be shared across threads
//! - **No hidden validation**: degenerate inputs surface as non-finite
//!   results; `BlackScholesParams::validate` is available for callers that
//!   want to reject them up front
//! - **Static dispatch** over `bsm_core::math::Distribution`
//!
//! ```rust
//! use bsm_core::types::OptionType;
//! use bsm_models::analytical::{BlackScholesModel, BlackScholesParams};
//!
//! let model = BlackScholesModel::standard();
//! let params = BlackScholesParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! let results = model.calc(&params, OptionType::Call);
//! assert!((results.price - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
