//! Probabilistic primitives used by the analytical pricing formulas.
//!
//! - `distributions`: The `Distribution` trait, `NormalDistribution`, and the
//!   free functions `norm_pdf` / `norm_cdf` for the standard law

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf, Distribution, NormalDistribution};
