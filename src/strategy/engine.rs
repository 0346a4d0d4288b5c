//! Trade engine: turns evaluator actions into executed, committed trades
//!
//! Only this layer talks to the execution collaborator; the ledger and the
//! PnL calculator never do. A trade that fails at the venue leaves the
//! ledger untouched, so the next poll re-evaluates from unchanged state.
//!
//! The two legs of a hedge are not atomic. The sell is executed and
//! committed first, then the buy is sized from the actual proceeds. If the
//! buy leg fails the engine returns [`AgentError::HedgeIncomplete`]: the
//! position is left one-sided with the sale proceeds out of the market, a
//! state the caller must surface rather than paper over. The engine never
//! retries the buy itself: replaying it against recorded proceeds after a
//! partial failure risks spending the same cash twice; the next tick's
//! evaluation recomputes everything from current holdings instead.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::common::errors::{AgentError, Result};
use crate::common::traits::{PositionStore, TradeExecutor};
use crate::common::types::{MarketPrices, Outcome, Side};
use crate::position::{locked_pnl, realized_pnl, PositionBook};
use crate::strategy::hedge::compute_hedge;

/// Outcome of a completed take-profit rebalance
#[derive(Debug, Clone, PartialEq)]
pub struct HedgeReport {
    pub shares_sold: Decimal,
    pub sell_price: Decimal,
    pub proceeds: Decimal,
    pub shares_bought: Decimal,
    pub buy_price: Decimal,
    pub remaining_yes: Decimal,
    pub remaining_no: Decimal,
    pub locked_pnl: Decimal,
}

/// Outcome of a completed stop-loss exit
#[derive(Debug, Clone, PartialEq)]
pub struct ExitReport {
    pub yes_shares_sold: Decimal,
    pub no_shares_sold: Decimal,
    pub total_proceeds: Decimal,
    pub realized_pnl: Decimal,
}

/// Executes strategy actions against the venue and the position book
pub struct TradeEngine {
    executor: Arc<dyn TradeExecutor>,
}

impl TradeEngine {
    pub fn new(executor: Arc<dyn TradeExecutor>) -> Self {
        Self { executor }
    }

    /// Sell `sell_fraction` of the YES holdings and hedge the proceeds into
    /// NO at the current prices.
    pub async fn execute_take_profit<S: PositionStore>(
        &self,
        book: &mut PositionBook<S>,
        prices: &MarketPrices,
        sell_fraction: Decimal,
    ) -> Result<HedgeReport> {
        let held = book.position().shares(Outcome::Yes);
        if held <= Decimal::ZERO {
            return Err(AgentError::InvalidInput(
                "no YES shares to sell".to_string(),
            ));
        }

        let plan = compute_hedge(held, sell_fraction, prices.yes, prices.no)?;
        info!(
            shares_to_sell = %plan.shares_to_sell,
            expected_proceeds = %plan.proceeds,
            shares_to_buy = %plan.shares_to_buy,
            "executing take-profit rebalance"
        );

        // leg 1: sell. A venue failure here propagates with the ledger
        // untouched.
        let sell_fill = self
            .executor
            .execute_trade(Outcome::Yes, Side::Sell, plan.shares_to_sell, prices.yes)
            .await?;
        let proceeds = book.sell(Outcome::Yes, sell_fill.filled_shares, sell_fill.avg_fill_price)?;

        // leg 2: buy, sized from what the sell actually brought in rather
        // than the planned figure.
        let shares_to_buy = proceeds / prices.no;
        let buy_fill = match self
            .executor
            .execute_trade(Outcome::No, Side::Buy, shares_to_buy, prices.no)
            .await
        {
            Ok(fill) => fill,
            Err(source) => {
                warn!(
                    shares_sold = %sell_fill.filled_shares,
                    proceeds = %proceeds,
                    "sell leg committed but buy leg failed; position is unhedged"
                );
                return Err(AgentError::HedgeIncomplete {
                    shares_sold: sell_fill.filled_shares,
                    proceeds,
                    reason: source.to_string(),
                });
            }
        };
        book.buy(Outcome::No, buy_fill.filled_shares, buy_fill.avg_fill_price)?;

        let position = book.position();
        let report = HedgeReport {
            shares_sold: sell_fill.filled_shares,
            sell_price: sell_fill.avg_fill_price,
            proceeds,
            shares_bought: buy_fill.filled_shares,
            buy_price: buy_fill.avg_fill_price,
            remaining_yes: position.shares(Outcome::Yes),
            remaining_no: position.shares(Outcome::No),
            locked_pnl: locked_pnl(position),
        };
        info!(
            remaining_yes = %report.remaining_yes,
            remaining_no = %report.remaining_no,
            locked_pnl = %report.locked_pnl,
            "take-profit rebalance complete"
        );
        Ok(report)
    }

    /// Sell all remaining shares of every held outcome and reset the book.
    pub async fn execute_stop_loss<S: PositionStore>(
        &self,
        book: &mut PositionBook<S>,
        prices: &MarketPrices,
    ) -> Result<ExitReport> {
        if !book.position().has_position() {
            return Err(AgentError::InvalidInput("no position to exit".to_string()));
        }

        let mut total_proceeds = Decimal::ZERO;
        let mut sold = [Decimal::ZERO, Decimal::ZERO];

        for (slot, outcome) in [Outcome::Yes, Outcome::No].into_iter().enumerate() {
            let held = book.position().shares(outcome);
            if held <= Decimal::ZERO {
                continue;
            }

            let price = prices.price_of(outcome);
            let fill = self
                .executor
                .execute_trade(outcome, Side::Sell, held, price)
                .await?;
            let proceeds = book.sell(outcome, fill.filled_shares, fill.avg_fill_price)?;
            total_proceeds += proceeds;
            sold[slot] = fill.filled_shares;
            info!(%outcome, shares = %fill.filled_shares, %proceeds, "stop-loss leg filled");
        }

        let final_pnl = realized_pnl(book.position());
        book.reset()?;

        info!(total_proceeds = %total_proceeds, realized_pnl = %final_pnl, "position closed");
        Ok(ExitReport {
            yes_shares_sold: sold[0],
            no_shares_sold: sold[1],
            total_proceeds,
            realized_pnl: final_pnl,
        })
    }
}
