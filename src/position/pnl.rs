//! Profit-and-loss metrics derived from a position snapshot
//!
//! Everything in this module is a pure function over `&Position` (plus live
//! prices where needed); nothing here mutates the ledger. All arithmetic is
//! `Decimal`: a winning share redeems for exactly 1 unit of currency, and
//! the locked-profit figure must be correct to the cent.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::common::types::{MarketPrices, Outcome};
use crate::position::Position;

/// Mark-to-market gain on shares still held: for each outcome with a
/// balance, `shares * (current_price - avg_cost)`. Excludes cash already
/// realized through sells.
pub fn unrealized_pnl(position: &Position, prices: &MarketPrices) -> Decimal {
    [Outcome::Yes, Outcome::No]
        .into_iter()
        .filter(|&outcome| position.shares(outcome) > Decimal::ZERO)
        .map(|outcome| {
            position.shares(outcome) * (prices.price_of(outcome) - position.avg_cost(outcome))
        })
        .sum()
}

/// Cash-flow-only P&L: currency received from sells minus currency spent on
/// buys. Excludes the value of any still-held shares.
pub fn realized_pnl(position: &Position) -> Decimal {
    position.total_withdrawn() - position.total_invested()
}

/// Profit guaranteed regardless of which outcome resolves true.
///
/// The worst-case resolution pays out `min(shares_yes, shares_no)` (each
/// winning share redeems for 1), and the net cash deployed is
/// `total_invested - total_withdrawn`. Once both sides are held and this
/// quantity is non-negative, the position cannot lose money under either
/// resolution.
///
/// A one-sided position has a zero worst-case payout, so its locked figure
/// is simply the negated net cash at risk.
pub fn locked_pnl(position: &Position) -> Decimal {
    let worst_case_payout = position
        .shares(Outcome::Yes)
        .min(position.shares(Outcome::No));
    worst_case_payout - position.net_cash_invested()
}

/// Return on investment in percent: `(unrealized + realized) / invested`.
/// Zero when nothing has been invested.
pub fn roi(position: &Position, prices: &MarketPrices) -> Decimal {
    let invested = position.total_invested();
    if invested.is_zero() {
        return Decimal::ZERO;
    }
    (unrealized_pnl(position, prices) + realized_pnl(position)) / invested * Decimal::from(100)
}

/// Final P&L under each possible resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeScenarios {
    pub if_yes_wins: Decimal,
    pub if_no_wins: Decimal,
    pub guaranteed_min: Decimal,
    pub best_case: Decimal,
}

/// P&L at resolution for both outcomes, net of all cash flows
pub fn outcome_scenarios(position: &Position) -> OutcomeScenarios {
    let net_cash = position.net_cash_invested();
    let if_yes_wins = position.shares(Outcome::Yes) - net_cash;
    let if_no_wins = position.shares(Outcome::No) - net_cash;

    OutcomeScenarios {
        if_yes_wins,
        if_no_wins,
        guaranteed_min: if_yes_wins.min(if_no_wins),
        best_case: if_yes_wins.max(if_no_wins),
    }
}

/// Aggregated snapshot of every P&L metric, for status logging
#[derive(Debug, Clone, Serialize)]
pub struct PnlReport {
    pub yes_shares: Decimal,
    pub no_shares: Decimal,
    pub current_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealized: Decimal,
    pub realized: Decimal,
    pub locked: Decimal,
    pub net: Decimal,
    pub roi_percent: Decimal,
    pub is_hedged: bool,
}

impl PnlReport {
    pub fn new(position: &Position, prices: &MarketPrices) -> Self {
        let current_value = position.shares(Outcome::Yes) * prices.yes
            + position.shares(Outcome::No) * prices.no;
        let cost_basis = position.shares(Outcome::Yes) * position.avg_cost(Outcome::Yes)
            + position.shares(Outcome::No) * position.avg_cost(Outcome::No);

        Self {
            yes_shares: position.shares(Outcome::Yes),
            no_shares: position.shares(Outcome::No),
            current_value,
            cost_basis,
            unrealized: unrealized_pnl(position, prices),
            realized: realized_pnl(position),
            locked: locked_pnl(position),
            net: current_value + position.total_withdrawn() - position.total_invested(),
            roi_percent: roi(position, prices),
            is_hedged: position.is_hedged(),
        }
    }
}
