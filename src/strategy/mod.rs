//! Strategy module: thresholds, hedge sizing and trade execution
//!
//! # Architecture
//!
//! ```text
//! probability tick
//!       │
//!       ▼
//! StrategyEvaluator.evaluate() ──► Evaluation { action, reason }
//!       │                              (pure, stateless)
//!       ▼
//! DecisionReviewer.review() ──► may veto a trade down to HOLD
//!       │
//!       ▼ (TAKE_PROFIT / STOP_LOSS)
//! TradeEngine
//!   - sizes the hedge via compute_hedge()
//!   - executes legs through the TradeExecutor collaborator
//!   - commits fills to the PositionBook, persist-first
//! ```
//!
//! The evaluator never touches the venue; the engine is the only caller of
//! the execution collaborator. Hedge sizing is pure arithmetic, tested in
//! isolation, with the documented non-atomicity between the two legs
//! handled in the engine.

pub mod advisor;
pub mod engine;
pub mod evaluator;
pub mod hedge;
pub mod types;

pub use advisor::{DecisionReviewer, RulesOnly};
pub use engine::{ExitReport, HedgeReport, TradeEngine};
pub use evaluator::StrategyEvaluator;
pub use hedge::{balanced_fraction, compute_hedge, HedgePlan};
pub use types::{Action, Evaluation, PositionState};
