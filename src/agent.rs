//! The polling agent
//!
//! One logical loop: fetch a quote, evaluate it against the position, let
//! the reviewer confirm or veto, execute if required, sleep. Every ledger
//! mutation is committed through the position book before the tick ends,
//! so a crash between ticks never loses a trade.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::common::errors::{AgentError, Result};
use crate::common::traits::{PositionStore, PriceFeed};
use crate::common::types::Outcome;
use crate::config::types::AppConfig;
use crate::position::{PnlReport, PositionBook};
use crate::strategy::{Action, DecisionReviewer, StrategyEvaluator, TradeEngine};

/// Polling agent managing a single binary market
pub struct HedgeAgent<S: PositionStore> {
    config: AppConfig,
    feed: Arc<dyn PriceFeed>,
    engine: TradeEngine,
    evaluator: StrategyEvaluator,
    reviewer: Box<dyn DecisionReviewer>,
    book: PositionBook<S>,
}

impl<S: PositionStore> HedgeAgent<S> {
    /// Assemble an agent from validated configuration and collaborators.
    ///
    /// Fails with `InvalidConfiguration` before the first poll if the
    /// strategy thresholds are inconsistent.
    pub fn new(
        config: AppConfig,
        feed: Arc<dyn PriceFeed>,
        engine: TradeEngine,
        reviewer: Box<dyn DecisionReviewer>,
        store: S,
    ) -> Result<Self> {
        let evaluator = StrategyEvaluator::new(config.strategy.clone())?;
        let book = PositionBook::open(store)?;

        Ok(Self {
            config,
            feed,
            engine,
            evaluator,
            reviewer,
            book,
        })
    }

    /// Read-only view of the managed position
    pub fn position(&self) -> &crate::position::Position {
        self.book.position()
    }

    /// Run the polling loop until Ctrl+C
    pub async fn run(&mut self) -> Result<()> {
        let market = self.config.market.condition_id.clone();
        info!(
            market = %market,
            question = self.config.market.question.as_deref().unwrap_or("unknown"),
            take_profit = %self.config.strategy.take_profit_threshold,
            stop_loss = %self.config.strategy.stop_loss_threshold,
            hedge_fraction = %self.config.strategy.hedge_sell_fraction,
            interval_s = self.config.strategy.poll_interval_seconds,
            "starting polling loop"
        );

        if self.book.position().has_position() {
            info!(
                yes = %self.book.position().shares(Outcome::Yes),
                no = %self.book.position().shares(Outcome::No),
                "restored existing position"
            );
        }

        let mut interval =
            tokio::time::interval(Duration::from_secs(self.config.strategy.poll_interval_seconds));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("received shutdown signal, stopping");
                    return Ok(());
                }
                _ = interval.tick() => {
                    if let Err(e) = self.poll_once(&market).await {
                        match e {
                            AgentError::PriceUnavailable(ref reason) => {
                                warn!(%reason, "skipping tick: no usable quote");
                            }
                            AgentError::HedgeIncomplete { .. } => {
                                error!(error = %e, "partial hedge; position is unhedged and will be re-evaluated next tick");
                            }
                            other => {
                                error!(error = %other, "tick failed");
                            }
                        }
                    }
                }
            }
        }
    }

    /// One fetch → evaluate → review → act cycle
    pub async fn poll_once(&mut self, market_id: &str) -> Result<()> {
        let prices = self.feed.get_prices(market_id).await?;

        if !prices.is_coherent() {
            return Err(AgentError::PriceUnavailable(format!(
                "incoherent quote: YES={} NO={} (sum {})",
                prices.yes,
                prices.no,
                prices.sum()
            )));
        }

        let probability = prices.probability();
        let proposed = self.evaluator.evaluate(probability, self.book.position());
        let evaluation = self
            .reviewer
            .review(proposed.clone(), self.book.position(), &prices);

        if evaluation.action != proposed.action {
            info!(
                proposed = %proposed.action,
                reviewed = %evaluation.action,
                reason = %evaluation.reason,
                "reviewer relabeled decision"
            );
        }

        let report = PnlReport::new(self.book.position(), &prices);
        debug!(
            probability = %probability,
            action = %evaluation.action,
            unrealized = %report.unrealized,
            locked = %report.locked,
            roi = %report.roi_percent,
            "tick evaluated"
        );

        match evaluation.action {
            Action::TakeProfit => {
                info!(reason = %evaluation.reason, "take-profit triggered");
                let hedge = self
                    .engine
                    .execute_take_profit(
                        &mut self.book,
                        &prices,
                        self.config.strategy.hedge_sell_fraction,
                    )
                    .await?;
                info!(
                    sold = %hedge.shares_sold,
                    bought = %hedge.shares_bought,
                    locked_pnl = %hedge.locked_pnl,
                    "hedge executed"
                );
            }
            Action::StopLoss => {
                warn!(reason = %evaluation.reason, "stop-loss triggered");
                let exit = self.engine.execute_stop_loss(&mut self.book, &prices).await?;
                info!(
                    proceeds = %exit.total_proceeds,
                    realized_pnl = %exit.realized_pnl,
                    "position exited"
                );
            }
            Action::Hold => {
                info!(reason = %evaluation.reason, net = %report.net, "holding");
            }
            Action::Wait => {
                info!(reason = %evaluation.reason, "waiting");
            }
        }

        Ok(())
    }
}
