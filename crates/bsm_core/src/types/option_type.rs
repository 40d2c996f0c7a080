//! Call/put tag for European options.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option type.
///
/// Selects the sign conventions used by delta and rho and the CDF arguments
/// (`d` versus `-d`) throughout the closed-form formulas.
///
/// # Examples
/// ```
/// use bsm_core::types::OptionType;
///
/// let call: OptionType = "Call".parse().unwrap();
/// assert!(call.is_call());
/// assert_eq!(call.to_string(), "call");
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: max(S - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidInput(format!(
                "Unknown option type: {}. Supported: call, put",
                other
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        for s in ["call", "CALL", " Call ", "c", "C"] {
            assert_eq!(s.parse::<OptionType>().unwrap(), OptionType::Call);
        }
        for s in ["put", "PUT", "p", "P"] {
            assert_eq!(s.parse::<OptionType>().unwrap(), OptionType::Put);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        match "digital".parse::<OptionType>() {
            Err(PricingError::InvalidInput(msg)) => assert!(msg.contains("digital")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in [OptionType::Call, OptionType::Put] {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
    }
}
