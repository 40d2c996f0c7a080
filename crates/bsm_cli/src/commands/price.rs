//! Price command implementation
//!
//! Prices a single option given on the command line.

use bsm_models::analytical::BlackScholesModel;
use tracing::info;

use super::{price_request, PricingRequest};
use crate::config::OutputFormat;
use crate::output;
use crate::Result;

/// Run the price command
pub fn run(request: &PricingRequest, format: OutputFormat, validate: bool) -> Result<String> {
    info!(
        option_type = %request.option_type,
        strike = request.params.strike,
        spot = request.params.spot,
        expiry = request.params.expiry,
        rate = request.params.rate,
        volatility = request.params.volatility,
        "Pricing single option"
    );

    let model = BlackScholesModel::standard();
    let priced = price_request(&model, request, validate)?;
    output::render(std::slice::from_ref(&priced), format)
}
