//! Configuration types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{AgentError, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Market under management
    pub market: MarketConfig,
    /// Strategy thresholds and sizing
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// The single binary market this agent manages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Market condition ID on Polymarket
    pub condition_id: String,
    /// Human-readable market question, for logs only
    #[serde(default)]
    pub question: Option<String>,
    /// Gamma API URL for market data
    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".to_string()
}

/// Strategy parameters.
///
/// Immutable once validated; passed by reference into the evaluator at
/// construction so core logic never reads the ambient environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Probability at or above which a take-profit hedge triggers
    #[serde(default = "default_take_profit")]
    pub take_profit_threshold: Decimal,
    /// Probability at or below which the position is exited entirely
    #[serde(default = "default_stop_loss")]
    pub stop_loss_threshold: Decimal,
    /// Fraction of held shares to sell when hedging (0, 1]
    #[serde(default = "default_hedge_sell_fraction")]
    pub hedge_sell_fraction: Decimal,
    /// Seconds between market polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            take_profit_threshold: default_take_profit(),
            stop_loss_threshold: default_stop_loss(),
            hedge_sell_fraction: default_hedge_sell_fraction(),
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

impl StrategyConfig {
    /// Validate threshold ordering and ranges.
    ///
    /// The agent refuses to start on failure rather than run with
    /// nonsensical rules.
    pub fn validate(&self) -> Result<()> {
        if !(Decimal::ZERO < self.stop_loss_threshold
            && self.stop_loss_threshold < self.take_profit_threshold
            && self.take_profit_threshold < Decimal::ONE)
        {
            return Err(AgentError::InvalidConfiguration(format!(
                "thresholds must satisfy 0 < stop_loss ({}) < take_profit ({}) < 1",
                self.stop_loss_threshold, self.take_profit_threshold
            )));
        }

        if !(Decimal::ZERO < self.hedge_sell_fraction
            && self.hedge_sell_fraction <= Decimal::ONE)
        {
            return Err(AgentError::InvalidConfiguration(format!(
                "hedge_sell_fraction must be in (0, 1], got {}",
                self.hedge_sell_fraction
            )));
        }

        Ok(())
    }
}

fn default_take_profit() -> Decimal {
    dec!(0.85)
}

fn default_stop_loss() -> Decimal {
    dec!(0.78)
}

fn default_hedge_sell_fraction() -> Decimal {
    dec!(1.0)
}

fn default_poll_interval() -> u64 {
    20
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Path of the persisted position snapshot
    #[serde(default = "default_position_file")]
    pub position_file: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            position_file: default_position_file(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_position_file() -> String {
    "position.json".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
