//! Decision review hook
//!
//! Seam for an optional second opinion over the rule-based evaluation
//! (human confirmation, an external model, a risk desk). A reviewer can
//! only relabel the proposed action to another action the evaluator already
//! enumerates, in practice vetoing a trade down to a hold. It never sizes
//! trades; quantities always come from the configured hedge fraction and
//! the ledger.

use crate::common::types::MarketPrices;
use crate::position::Position;
use crate::strategy::types::Evaluation;

/// Reviews a proposed evaluation before it is acted on
pub trait DecisionReviewer: Send + Sync {
    fn review(
        &self,
        proposed: Evaluation,
        position: &Position,
        prices: &MarketPrices,
    ) -> Evaluation;
}

/// Default reviewer: every rule-based decision passes through unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct RulesOnly;

impl DecisionReviewer for RulesOnly {
    fn review(
        &self,
        proposed: Evaluation,
        _position: &Position,
        _prices: &MarketPrices,
    ) -> Evaluation {
        proposed
    }
}
