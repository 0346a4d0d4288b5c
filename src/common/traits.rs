//! Trait definitions for the agent's external collaborators
//!
//! The core never talks to the network or the filesystem directly; it goes
//! through these three narrow seams. Production implementations live in
//! `polymarket::gamma` (price feed), `execution` (trade executor) and
//! `position::store` (persistence).

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::errors::Result;
use super::types::{MarketPrices, Outcome, Side, TradeFill};
use crate::position::Position;

/// Source of two-sided quotes for a market.
///
/// Implementations surface any failure (transport, missing market,
/// unparseable or out-of-range prices) as `AgentError::PriceUnavailable`;
/// the polling loop logs it and retries on the next tick.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the current YES/NO prices for a market
    async fn get_prices(&self, market_id: &str) -> Result<MarketPrices>;
}

/// Venue-side order execution.
///
/// Only the trade engine calls this; the ledger and PnL calculator never
/// do. A failed call must leave the venue position untouched so the ledger
/// can stay unmutated too.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    /// Execute a buy or sell of `shares` outcome tokens at `price_limit`
    async fn execute_trade(
        &self,
        outcome: Outcome,
        side: Side,
        shares: Decimal,
        price_limit: Decimal,
    ) -> Result<TradeFill>;
}

/// Durable storage for position snapshots.
///
/// `save` is a blocking, scoped write: it either completes or returns an
/// error before the mutating call is considered committed.
pub trait PositionStore: Send + Sync {
    /// Persist the full position snapshot
    fn save(&self, position: &Position) -> Result<()>;

    /// Load the last persisted snapshot, if any
    fn load(&self) -> Result<Option<Position>>;
}
