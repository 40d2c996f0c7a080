//! Probability distributions for closed-form option pricing.
//!
//! This module provides:
//! - `Distribution`: The density / cumulative capability the pricing formulas consume
//! - `NormalDistribution`: The normal law N(μ, σ²), with a `standard()` instance
//! - `norm_pdf` / `norm_cdf`: The standard normal law as free functions
//!
//! The cumulative function is evaluated through the Gauss error function
//! from `statrs`; results are accurate to about 1e-11 absolute.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erf;

use crate::types::DistributionError;

/// A probability law over the real line.
///
/// Pricing models are generic over this trait so that an alternative law can
/// be substituted without touching the pricing formulas.
///
/// # Contract
/// - Both methods are total: every real input (including ±∞ and NaN) yields
///   a value, never a panic
/// - Implementations hold no mutable state, hence the `Send + Sync` bound
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::{Distribution, NormalDistribution};
///
/// fn tail<D: Distribution>(dist: &D, x: f64) -> f64 {
///     1.0 - dist.cdf(x)
/// }
///
/// let p = tail(&NormalDistribution::standard(), 1.96);
/// assert!((p - 0.025).abs() < 1e-3);
/// ```
pub trait Distribution: Send + Sync {
    /// Probability density function evaluated at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;
}

impl<D: Distribution + ?Sized> Distribution for &D {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        (**self).pdf(x)
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        (**self).cdf(x)
    }
}

/// Normal distribution N(μ, σ²).
///
/// Immutable once constructed. The standard instance (μ = 0, σ = 1) is the
/// one the Black-Scholes formulas are written against.
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::{Distribution, NormalDistribution};
///
/// let std_norm = NormalDistribution::standard();
/// assert_eq!(std_norm.cdf(0.0), 0.5);
///
/// let shifted = NormalDistribution::new(1.0, 2.0).unwrap();
/// assert_eq!(shifted.cdf(1.0), 0.5);
///
/// assert!(NormalDistribution::new(0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalDistribution {
    /// Mean (μ)
    mean: f64,
    /// Standard deviation (σ)
    std_dev: f64,
}

impl NormalDistribution {
    /// The standard normal distribution N(0, 1).
    #[inline]
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Creates a normal distribution with the given mean and standard deviation.
    ///
    /// # Errors
    /// - `DistributionError::InvalidMean` if `mean` is not finite
    /// - `DistributionError::InvalidStdDev` if `std_dev` is not finite or not positive
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::InvalidMean { mean });
        }

        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(DistributionError::InvalidStdDev { std_dev });
        }

        Ok(Self { mean, std_dev })
    }

    /// Returns the mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution for NormalDistribution {
    /// φ(x) = exp(-(x - μ)² / (2σ²)) / (σ·√(2π))
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        let z = x - self.mean;
        (-(z * z) / (2.0 * self.std_dev * self.std_dev)).exp()
            / (self.std_dev * (2.0 * PI).sqrt())
    }

    /// Φ(x) = ½·(1 + erf((x - μ) / (σ·√2)))
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf((x - self.mean) / (self.std_dev * SQRT_2)))
    }
}

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π)
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    NormalDistribution::standard().pdf(x)
}

/// Standard normal cumulative distribution function.
///
/// # Examples
/// ```
/// use bsm_core::math::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!(norm_cdf(-8.0) < 1e-12);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    NormalDistribution::standard().cdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_standard_parameters() {
        let dist = NormalDistribution::standard();
        assert_eq!(dist.mean(), 0.0);
        assert_eq!(dist.std_dev(), 1.0);
        assert_eq!(dist, NormalDistribution::default());
    }

    #[test]
    fn test_new_valid_parameters() {
        let dist = NormalDistribution::new(1.5, 0.3).unwrap();
        assert_eq!(dist.mean(), 1.5);
        assert_eq!(dist.std_dev(), 0.3);
    }

    #[test]
    fn test_new_rejects_non_positive_std_dev() {
        for std_dev in [0.0, -1.0] {
            match NormalDistribution::new(0.0, std_dev) {
                Err(DistributionError::InvalidStdDev { std_dev: got }) => {
                    assert_eq!(got, std_dev)
                }
                other => panic!("Expected InvalidStdDev, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_new_rejects_non_finite_parameters() {
        assert!(matches!(
            NormalDistribution::new(f64::NAN, 1.0),
            Err(DistributionError::InvalidMean { .. })
        ));
        assert!(matches!(
            NormalDistribution::new(0.0, f64::INFINITY),
            Err(DistributionError::InvalidStdDev { .. })
        ));
    }

    // ==========================================================
    // pdf tests
    // ==========================================================

    #[test]
    fn test_pdf_reference_values() {
        let dist = NormalDistribution::standard();

        assert_relative_eq!(dist.pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(0.1), 0.3969525474770118, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(0.5), 0.3520653267642995, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(1.0), 0.24197072451914337, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(3.0), 0.0044318484119380075, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(-5.0), 1.4867195147342979e-06, max_relative = 1e-12);
    }

    #[test]
    fn test_pdf_symmetry() {
        let dist = NormalDistribution::standard();
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(dist.pdf(x), dist.pdf(-x));
        }
    }

    #[test]
    fn test_pdf_maximum_at_mean() {
        let dist = NormalDistribution::new(2.0, 0.5).unwrap();
        let peak = dist.pdf(2.0);
        for x in [1.0, 1.9, 2.1, 3.0] {
            assert!(peak > dist.pdf(x), "pdf(mean) not greater than pdf({})", x);
        }
    }

    #[test]
    fn test_pdf_scaled_distribution() {
        // σ = 2 halves the peak density
        let dist = NormalDistribution::new(1.0, 2.0).unwrap();
        assert_relative_eq!(dist.pdf(1.0), 0.3989422804014327 / 2.0, epsilon = 1e-15);
        assert_relative_eq!(dist.pdf(3.0), 0.24197072451914337 / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pdf_tails_vanish() {
        let dist = NormalDistribution::standard();
        assert!(dist.pdf(8.0) < 1e-12);
        assert_eq!(dist.pdf(f64::INFINITY), 0.0);
        assert_eq!(dist.pdf(f64::NEG_INFINITY), 0.0);
    }

    // ==========================================================
    // cdf tests
    // ==========================================================

    #[test]
    fn test_cdf_at_mean_is_half() {
        assert_eq!(NormalDistribution::standard().cdf(0.0), 0.5);
        assert_eq!(NormalDistribution::new(-3.0, 4.0).unwrap().cdf(-3.0), 0.5);
    }

    #[test]
    fn test_cdf_reference_values() {
        let dist = NormalDistribution::standard();

        assert_relative_eq!(dist.cdf(0.1), 0.539827837277029, epsilon = 1e-10);
        assert_relative_eq!(dist.cdf(0.5), 0.6914624612740131, epsilon = 1e-10);
        assert_relative_eq!(dist.cdf(1.0), 0.8413447460685429, epsilon = 1e-10);
        assert_relative_eq!(dist.cdf(-1.0), 0.15865525393145707, epsilon = 1e-10);
        assert_relative_eq!(dist.cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
        assert_relative_eq!(dist.cdf(-5.0), 2.866515718791939e-07, max_relative = 1e-6);
    }

    #[test]
    fn test_cdf_symmetry() {
        let dist = NormalDistribution::standard();
        for x in [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0] {
            assert_relative_eq!(dist.cdf(-x), 1.0 - dist.cdf(x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_cdf_limits() {
        let dist = NormalDistribution::standard();
        assert_eq!(dist.cdf(f64::INFINITY), 1.0);
        assert_eq!(dist.cdf(f64::NEG_INFINITY), 0.0);
        assert!(dist.cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_monotonic() {
        let dist = NormalDistribution::standard();
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                dist.cdf(pair[1]) > dist.cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_cdf_standardises_shifted_distribution() {
        // Φ_{μ,σ}(μ + σ) = Φ(1)
        let dist = NormalDistribution::new(1.0, 2.0).unwrap();
        assert_relative_eq!(dist.cdf(3.0), norm_cdf(1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of the CDF approximates the PDF
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-8);
        }
    }

    // ==========================================================
    // Trait object and reference tests
    // ==========================================================

    #[test]
    fn test_reference_implements_distribution() {
        fn density_at_zero<D: Distribution>(dist: D) -> f64 {
            dist.pdf(0.0)
        }

        let dist = NormalDistribution::standard();
        assert_eq!(density_at_zero(&dist), dist.pdf(0.0));
    }

    #[test]
    fn test_free_functions_match_standard_instance() {
        let dist = NormalDistribution::standard();
        for x in [-2.5, -0.3, 0.0, 0.7, 4.0] {
            assert_eq!(norm_pdf(x), dist.pdf(x));
            assert_eq!(norm_cdf(x), dist.cdf(x));
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_cdf_symmetry_property(x in -10.0f64..10.0) {
                let dist = NormalDistribution::standard();
                prop_assert!((dist.cdf(-x) - (1.0 - dist.cdf(x))).abs() < 1e-14);
            }

            #[test]
            fn test_cdf_bounded_property(x in -50.0f64..50.0) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p), "cdf({}) = {} outside [0, 1]", x, p);
            }

            #[test]
            fn test_pdf_non_negative_property(
                x in -50.0f64..50.0,
                mean in -5.0f64..5.0,
                std_dev in 0.01f64..10.0,
            ) {
                let dist = NormalDistribution::new(mean, std_dev).unwrap();
                prop_assert!(dist.pdf(x) >= 0.0);
            }
        }
    }
}
