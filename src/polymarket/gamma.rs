//! REST client for the Polymarket Gamma API
//!
//! The agent's production price feed. It fetches a market by condition id
//! and reads the two outcome prices; everything that can go wrong on the
//! way (transport, missing market, malformed or out-of-range prices) is
//! surfaced through the `PriceFeed` seam as `PriceUnavailable`.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, instrument};

use super::messages::GammaMarket;
use crate::common::errors::{AgentError, Result};
use crate::common::traits::PriceFeed;
use crate::common::types::MarketPrices;

/// REST client for the Gamma market-data API
#[derive(Debug, Clone)]
pub struct GammaClient {
    client: Client,
    base_url: String,
}

impl GammaClient {
    /// Create a new client with the default 30s timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AgentError::HttpRequest)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a market by condition id.
    ///
    /// The endpoint filters on `condition_ids` (plural) and returns an
    /// array; an empty array means the market does not exist.
    #[instrument(skip(self))]
    pub async fn get_market(&self, condition_id: &str) -> Result<GammaMarket> {
        let url = format!(
            "{}/markets?condition_ids={}",
            self.base_url,
            condition_id.to_lowercase()
        );
        debug!("Fetching market from Gamma API: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::PriceUnavailable(format!(
                "Gamma API returned status {}: {}",
                status, body
            )));
        }

        let mut markets: Vec<GammaMarket> = response.json().await?;
        if markets.is_empty() {
            return Err(AgentError::MarketNotFound(condition_id.to_string()));
        }
        Ok(markets.remove(0))
    }
}

#[async_trait]
impl PriceFeed for GammaClient {
    async fn get_prices(&self, market_id: &str) -> Result<MarketPrices> {
        let market = match self.get_market(market_id).await {
            Ok(market) => market,
            Err(err @ AgentError::PriceUnavailable(_)) => return Err(err),
            Err(other) => return Err(AgentError::PriceUnavailable(other.to_string())),
        };

        let (yes, no) = market.price_pair()?;

        let in_range = |price: Decimal| price >= Decimal::ZERO && price <= Decimal::ONE;
        if !in_range(yes) || !in_range(no) {
            return Err(AgentError::PriceUnavailable(format!(
                "outcome prices out of range: YES={} NO={}",
                yes, no
            )));
        }

        Ok(MarketPrices::new(yes, no))
    }
}
