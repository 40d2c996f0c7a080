//! bsm - Command Line Front-End for Black-Scholes-Merton Pricing
//!
//! # Commands
//!
//! - `bsm price --strike K --spot S --expiry T --rate R --volatility V` - Price one option
//! - `bsm batch --file <requests.toml>` - Price every request in a TOML file
//! - `bsm parity --strike K ...` - Report the put-call parity residual
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate only wires arguments, configuration
//! and logging to `bsm_models`; it contains no pricing logic of its own.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use bsm_core::types::OptionType;
use bsm_models::analytical::BlackScholesParams;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use crate::commands::PricingRequest;
use crate::config::{CliConfig, LogLevel, OutputFormat};

/// Black-Scholes-Merton option pricing CLI
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML, optional)
    #[arg(short, long, global = true, default_value = "bsm.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format; overrides the config file
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Reject non-positive strike, spot, expiry or volatility before pricing
    #[arg(long, global = true)]
    validate: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Market observables shared by the single-option commands
#[derive(Args, Debug, Clone, Copy)]
struct MarketArgs {
    /// Strike price (K)
    #[arg(short = 'k', long)]
    strike: f64,

    /// Underlying spot price (S)
    #[arg(short, long)]
    spot: f64,

    /// Time to expiration in years (T)
    #[arg(short = 't', long)]
    expiry: f64,

    /// Continuously-compounded risk-free rate (r)
    #[arg(short, long, allow_negative_numbers = true)]
    rate: f64,

    /// Annualised volatility (σ)
    #[arg(long)]
    volatility: f64,
}

impl From<MarketArgs> for BlackScholesParams {
    fn from(args: MarketArgs) -> Self {
        BlackScholesParams::new(args.strike, args.spot, args.expiry, args.rate, args.volatility)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option and its Greeks
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Option type (call or put)
        #[arg(short, long, default_value = "call")]
        option_type: String,
    },

    /// Price every [[requests]] entry of a TOML file
    Batch {
        /// Path to the request file
        #[arg(long)]
        file: PathBuf,
    },

    /// Check put-call parity for the given parameters
    Parity {
        #[command(flatten)]
        market: MarketArgs,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let log_level = match (&cli.log_level, cli.verbose) {
        (_, true) => LogLevel::Debug,
        (Some(level), false) => LogLevel::from_str(level)?,
        (None, false) => config.log_level,
    };
    init_tracing(log_level.as_filter_str());

    let format = cli.format.unwrap_or(config.format);
    let validate = cli.validate || config.validate_inputs;
    info!(%log_level, ?format, validate, "Configuration loaded");

    let rendered = match cli.command {
        Commands::Price {
            market,
            option_type,
        } => {
            let request = PricingRequest {
                id: "cli".to_string(),
                option_type: OptionType::from_str(&option_type).map_err(CliError::from)?,
                params: market.into(),
            };
            commands::price::run(&request, format, validate)?
        }
        Commands::Batch { file } => commands::batch::run(&file, format, validate)
            .with_context(|| format!("batch pricing of {}", file.display()))?,
        Commands::Parity { market } => commands::parity::run(&market.into(), format, validate)?,
    };

    print!("{}", rendered);
    Ok(())
}
