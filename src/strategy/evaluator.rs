//! Threshold-based decision function
//!
//! The evaluator is stateless: each tick it maps the observed probability
//! and the current position to an [`Action`]. Re-evaluating the same
//! probability against an unchanged position always yields the same
//! decision, so a failed execution is simply retried by the next poll
//! re-deriving it from unchanged state.

use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::common::types::Outcome;
use crate::config::types::StrategyConfig;
use crate::position::Position;
use crate::strategy::types::{Action, Evaluation, PositionState};

/// Maps (probability, position) to an action using fixed thresholds
#[derive(Debug, Clone)]
pub struct StrategyEvaluator {
    config: StrategyConfig,
}

impl StrategyEvaluator {
    /// Build an evaluator, refusing configurations where the stop-loss
    /// threshold does not sit strictly below the take-profit threshold.
    pub fn new(config: StrategyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Evaluate one probability observation against the current position.
    ///
    /// Thresholds are inclusive on both sides. A hedged position is held
    /// unconditionally: once the opposite side is acquired the agent never
    /// re-hedges and never stop-losses, whatever the price does. The same
    /// applies after a full liquidation leaves only opposite-side shares.
    pub fn evaluate(&self, probability: Decimal, position: &Position) -> Evaluation {
        match PositionState::of(position) {
            PositionState::NoPosition => {
                Evaluation::new(Action::Wait, "no position open")
            }
            PositionState::OpenHedged => Evaluation::new(
                Action::Hold,
                "both sides held; outcome-independent payout already locked",
            ),
            PositionState::OpenUnhedged => {
                // only a majority (YES) position is actively managed; a
                // leftover NO-only book is the aftermath of a completed
                // rebalance and rides to resolution
                if position.shares(Outcome::Yes) <= Decimal::ZERO {
                    return Evaluation::new(Action::Hold, "opposite side only; riding to resolution");
                }

                if probability >= self.config.take_profit_threshold {
                    Evaluation::new(
                        Action::TakeProfit,
                        format!(
                            "probability {} >= take-profit threshold {}",
                            probability, self.config.take_profit_threshold
                        ),
                    )
                } else if probability <= self.config.stop_loss_threshold {
                    Evaluation::new(
                        Action::StopLoss,
                        format!(
                            "probability {} <= stop-loss threshold {}",
                            probability, self.config.stop_loss_threshold
                        ),
                    )
                } else {
                    Evaluation::new(
                        Action::Hold,
                        format!(
                            "probability {} within thresholds ({}, {})",
                            probability,
                            self.config.stop_loss_threshold,
                            self.config.take_profit_threshold
                        ),
                    )
                }
            }
        }
    }
}
