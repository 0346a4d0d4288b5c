//! Strategy decision types

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Action recommended for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// No position open; nothing to manage
    Wait,
    /// Keep the current position untouched
    Hold,
    /// Sell the configured fraction of the majority side and hedge the
    /// proceeds into the opposite token
    TakeProfit,
    /// Sell everything and reset the position
    StopLoss,
}

impl Action {
    /// Whether this action requires trades to be executed
    pub fn requires_execution(&self) -> bool {
        matches!(self, Action::TakeProfit | Action::StopLoss)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Hold => write!(f, "HOLD"),
            Action::TakeProfit => write!(f, "TAKE_PROFIT"),
            Action::StopLoss => write!(f, "STOP_LOSS"),
        }
    }
}

/// An action together with the rationale behind it
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub action: Action,
    pub reason: String,
}

impl Evaluation {
    pub fn new(action: Action, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
        }
    }
}

/// Conceptual lifecycle state, derived from share counts on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    /// No shares held on either side
    NoPosition,
    /// Exactly one side held
    OpenUnhedged,
    /// Both sides held simultaneously
    OpenHedged,
}

impl PositionState {
    pub fn of(position: &Position) -> Self {
        if !position.has_position() {
            PositionState::NoPosition
        } else if position.is_hedged() {
            PositionState::OpenHedged
        } else {
            PositionState::OpenUnhedged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Outcome;
    use rust_decimal_macros::dec;

    #[test]
    fn test_position_state_derivation() {
        let mut position = Position::new();
        assert_eq!(PositionState::of(&position), PositionState::NoPosition);

        position.apply_buy(Outcome::Yes, dec!(10), dec!(0.80)).unwrap();
        assert_eq!(PositionState::of(&position), PositionState::OpenUnhedged);

        position.apply_buy(Outcome::No, dec!(10), dec!(0.15)).unwrap();
        assert_eq!(PositionState::of(&position), PositionState::OpenHedged);
    }

    #[test]
    fn test_action_execution_flag() {
        assert!(Action::TakeProfit.requires_execution());
        assert!(Action::StopLoss.requires_execution());
        assert!(!Action::Hold.requires_execution());
        assert!(!Action::Wait.requires_execution());
    }
}
