//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{AgentError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with HEDGE__)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // HEDGE__MARKET__CONDITION_ID=0x... style overrides
    builder = builder.add_source(
        Environment::with_prefix("HEDGE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| AgentError::InvalidConfiguration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AgentError::InvalidConfiguration(e.to_string()))
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    // Pick up a local .env file if present
    dotenvy::dotenv().ok();

    let condition_id = std::env::var("MARKET_CONDITION_ID").map_err(|_| {
        AgentError::InvalidConfiguration("MARKET_CONDITION_ID not set".to_string())
    })?;

    let market = super::types::MarketConfig {
        condition_id,
        question: std::env::var("MARKET_QUESTION").ok(),
        gamma_url: std::env::var("GAMMA_URL")
            .unwrap_or_else(|_| "https://gamma-api.polymarket.com".to_string()),
    };

    Ok(AppConfig {
        market,
        strategy: super::types::StrategyConfig::default(),
        settings: super::types::AppSettings::default(),
    })
}
