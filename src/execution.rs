//! Paper trade executor
//!
//! Fills every order instantly at its limit price without touching a
//! venue. This is the default execution mode; wiring in signed on-chain
//! order placement means providing another `TradeExecutor` impl.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Mutex;
use tracing::info;

use crate::common::errors::{AgentError, Result};
use crate::common::traits::TradeExecutor;
use crate::common::types::{Outcome, Side, TradeFill};

/// A fill recorded by the paper executor
#[derive(Debug, Clone, PartialEq)]
pub struct PaperFill {
    pub outcome: Outcome,
    pub side: Side,
    pub shares: Decimal,
    pub price: Decimal,
}

/// Simulated executor that fills at the limit price and keeps a fill log
#[derive(Debug, Default)]
pub struct PaperExecutor {
    fills: Mutex<Vec<PaperFill>>,
}

impl PaperExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fills executed so far, in order
    pub fn fills(&self) -> Vec<PaperFill> {
        self.fills.lock().expect("fill log lock poisoned").clone()
    }
}

#[async_trait]
impl TradeExecutor for PaperExecutor {
    async fn execute_trade(
        &self,
        outcome: Outcome,
        side: Side,
        shares: Decimal,
        price_limit: Decimal,
    ) -> Result<TradeFill> {
        if shares <= Decimal::ZERO {
            return Err(AgentError::Execution(format!(
                "cannot fill non-positive quantity {}",
                shares
            )));
        }

        info!(
            %side,
            %outcome,
            %shares,
            price = %price_limit,
            notional = %(shares * price_limit),
            "paper fill"
        );

        self.fills
            .lock()
            .expect("fill log lock poisoned")
            .push(PaperFill {
                outcome,
                side,
                shares,
                price: price_limit,
            });

        Ok(TradeFill {
            filled_shares: shares,
            avg_fill_price: price_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_fills_at_limit_price() {
        let executor = PaperExecutor::new();
        let fill = executor
            .execute_trade(Outcome::Yes, Side::Buy, dec!(100), dec!(0.80))
            .await
            .unwrap();

        assert_eq!(fill.filled_shares, dec!(100));
        assert_eq!(fill.avg_fill_price, dec!(0.80));
        assert_eq!(executor.fills().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_quantity() {
        let executor = PaperExecutor::new();
        let result = executor
            .execute_trade(Outcome::Yes, Side::Sell, dec!(0), dec!(0.80))
            .await;
        assert!(matches!(result, Err(AgentError::Execution(_))));
        assert!(executor.fills().is_empty());
    }
}
