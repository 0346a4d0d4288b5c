//! PolymarketHedger Library
//!
//! A Rust library for managing a hedged position on a Polymarket binary
//! market: poll the implied probability, lock in profit by rebalancing
//! into the opposite outcome token, or cut losses by exiting entirely.

pub mod agent;
pub mod common;
pub mod config;
pub mod execution;
pub mod polymarket;
pub mod position;
pub mod strategy;

// Re-export commonly used types
pub use agent::HedgeAgent;
pub use common::errors::{AgentError, Result};
pub use common::traits::{PositionStore, PriceFeed, TradeExecutor};
pub use common::types::{MarketPrices, Outcome, Side, TradeFill};
pub use config::types::{AppConfig, MarketConfig, StrategyConfig};
pub use execution::PaperExecutor;
pub use polymarket::GammaClient;
pub use position::{
    locked_pnl, outcome_scenarios, realized_pnl, roi, unrealized_pnl, JsonFileStore, LedgerEntry,
    MemoryStore, OutcomeScenarios, PnlReport, Position, PositionBook,
};

// Strategy types
pub use strategy::{
    balanced_fraction, compute_hedge, Action, DecisionReviewer, Evaluation, ExitReport,
    HedgePlan, HedgeReport, PositionState, RulesOnly, StrategyEvaluator, TradeEngine,
};
