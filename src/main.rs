//! PolymarketHedger - Main Entry Point
//!
//! Polls a Polymarket binary market and manages a single position with
//! automated take-profit hedging and stop-loss exits.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use polymarket_hedger::agent::HedgeAgent;
use polymarket_hedger::config::loader::load_config;
use polymarket_hedger::execution::PaperExecutor;
use polymarket_hedger::polymarket::GammaClient;
use polymarket_hedger::position::JsonFileStore;
use polymarket_hedger::strategy::{RulesOnly, TradeEngine};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Market condition ID to manage (overrides the config file)
    #[arg(long, env = "MARKET_CONDITION_ID")]
    market: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PolymarketHedger");
    info!("Configuration file: {}", args.config);

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let mut config = load_config(Some(&args.config))?;
    if let Some(market) = args.market {
        config.market.condition_id = market;
    }

    // Thresholds are checked here so the process refuses to start with
    // nonsensical rules.
    config.strategy.validate()?;

    let timeout = std::time::Duration::from_secs(config.settings.request_timeout_seconds);
    let feed = Arc::new(GammaClient::with_timeout(&config.market.gamma_url, timeout)?);
    let engine = TradeEngine::new(Arc::new(PaperExecutor::new()));
    let store = JsonFileStore::new(&config.settings.position_file);

    let mut agent = HedgeAgent::new(config, feed, engine, Box::new(RulesOnly), store)?;
    agent.run().await?;

    info!("Agent shutdown complete");
    Ok(())
}
