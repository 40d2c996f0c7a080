//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared request and
//! result records live here so every command prices and renders the same way.

pub mod batch;
pub mod parity;
pub mod price;

use bsm_core::types::{OptionType, PricingError};
use bsm_models::analytical::{BlackScholesModel, BlackScholesParams, BlackScholesResults};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Result;

/// One pricing request: an identifier, the option type and the market parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingRequest {
    pub id: String,
    pub option_type: OptionType,
    #[serde(flatten)]
    pub params: BlackScholesParams,
}

/// A request together with its price and Greeks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedRequest {
    pub id: String,
    pub option_type: OptionType,
    #[serde(flatten)]
    pub params: BlackScholesParams,
    #[serde(flatten)]
    pub results: BlackScholesResults,
}

/// Prices a single request.
///
/// With `validate` set, invalid parameters are rejected before pricing and
/// non-finite results are reported as `PricingError::NumericalInstability`.
/// Otherwise non-finite results are only logged.
pub fn price_request(
    model: &BlackScholesModel,
    request: &PricingRequest,
    validate: bool,
) -> Result<PricedRequest> {
    if validate {
        request.params.validate()?;
    }

    let results = model.calc(&request.params, request.option_type);
    debug!(id = %request.id, price = results.price, "Priced request");

    if !results.is_finite() {
        if validate {
            return Err(PricingError::NumericalInstability(format!(
                "request {} produced a non-finite price or Greek",
                request.id
            ))
            .into());
        }
        warn!(
            id = %request.id,
            "Non-finite results; check that strike, spot, expiry and volatility are positive"
        );
    }

    Ok(PricedRequest {
        id: request.id.clone(),
        option_type: request.option_type,
        params: request.params,
        results,
    })
}
