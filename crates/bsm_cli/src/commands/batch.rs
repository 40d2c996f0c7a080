//! Batch command implementation
//!
//! Prices every `[[requests]]` entry of a TOML file:
//!
//! ```toml
//! [[requests]]
//! id = "atm-call"
//! option_type = "call"
//! strike = 100.0
//! spot = 100.0
//! expiry = 1.0
//! rate = 0.05
//! volatility = 0.2
//! ```

use std::path::Path;

use bsm_models::analytical::BlackScholesModel;
use serde::Deserialize;
use tracing::info;

use super::{price_request, PricedRequest, PricingRequest};
use crate::config::OutputFormat;
use crate::output;
use crate::{CliError, Result};

/// Contents of a batch request file.
#[derive(Debug, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub requests: Vec<PricingRequest>,
}

impl BatchFile {
    /// Parses a batch file from TOML text; `origin` names the source in errors.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| CliError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Reads and parses a batch file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }
}

/// Prices every request in the batch, in file order.
pub fn price_all(batch: &BatchFile, validate: bool) -> Result<Vec<PricedRequest>> {
    let model = BlackScholesModel::standard();
    batch
        .requests
        .iter()
        .map(|request| price_request(&model, request, validate))
        .collect()
}

/// Run the batch command
pub fn run(file: &Path, format: OutputFormat, validate: bool) -> Result<String> {
    let batch = BatchFile::load(file)?;
    info!(file = %file.display(), requests = batch.requests.len(), "Loaded batch");

    if batch.requests.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "No [[requests]] entries in {}",
            file.display()
        )));
    }

    let priced = price_all(&batch, validate)?;
    info!(priced = priced.len(), "Batch pricing complete");
    output::render(&priced, format)
}
