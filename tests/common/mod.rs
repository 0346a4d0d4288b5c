//! Common test utilities and fixtures

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use polymarket_hedger::common::errors::{AgentError, Result};
use polymarket_hedger::common::traits::PriceFeed;
use polymarket_hedger::common::types::{MarketPrices, Outcome};
use polymarket_hedger::config::types::{AppConfig, MarketConfig, StrategyConfig};
use polymarket_hedger::position::Position;

/// Build the canonical entry position: 1250 YES shares at $0.80
pub fn entered_position() -> Position {
    let mut position = Position::new();
    position
        .apply_buy(Outcome::Yes, dec!(1250), dec!(0.80))
        .unwrap();
    position
}

/// App config with default strategy parameters and a test market id
pub fn test_config() -> AppConfig {
    AppConfig {
        market: MarketConfig {
            condition_id: "0xtestmarket".to_string(),
            question: Some("Will the test pass?".to_string()),
            gamma_url: "http://localhost".to_string(),
        },
        strategy: StrategyConfig::default(),
        settings: Default::default(),
    }
}

/// Price feed that replays a scripted sequence of quotes
pub struct ScriptedFeed {
    quotes: Mutex<VecDeque<MarketPrices>>,
}

impl ScriptedFeed {
    pub fn new(quotes: impl IntoIterator<Item = MarketPrices>) -> Self {
        Self {
            quotes: Mutex::new(quotes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PriceFeed for ScriptedFeed {
    async fn get_prices(&self, _market_id: &str) -> Result<MarketPrices> {
        self.quotes
            .lock()
            .expect("quote lock poisoned")
            .pop_front()
            .ok_or_else(|| AgentError::PriceUnavailable("script exhausted".to_string()))
    }
}

/// Sample Gamma API responses for wiremock tests
pub mod gamma_responses {
    /// Market with outcomePrices as a JSON array
    pub const MARKET_ARRAY_PRICES: &str = r#"[
        {
            "id": "market_001",
            "conditionId": "0xtestmarket",
            "question": "Will the test pass?",
            "outcomePrices": ["0.86", "0.14"],
            "active": true,
            "closed": false
        }
    ]"#;

    /// Market with outcomePrices as embedded JSON (the other Gamma form)
    pub const MARKET_EMBEDDED_PRICES: &str = r#"[
        {
            "id": "market_002",
            "conditionId": "0xtestmarket",
            "question": "Will the test pass?",
            "outcomePrices": "[\"0.76\", \"0.24\"]",
            "active": true,
            "closed": false
        }
    ]"#;

    /// Market whose prices cannot be parsed
    pub const MARKET_BAD_PRICES: &str = r#"[
        {
            "conditionId": "0xtestmarket",
            "outcomePrices": ["not-a-number", "0.14"]
        }
    ]"#;

    /// Market with prices outside [0, 1]
    pub const MARKET_OUT_OF_RANGE_PRICES: &str = r#"[
        {
            "conditionId": "0xtestmarket",
            "outcomePrices": ["1.40", "-0.40"]
        }
    ]"#;

    /// No market matched the condition id
    pub const EMPTY: &str = "[]";
}
