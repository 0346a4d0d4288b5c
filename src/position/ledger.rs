//! Position ledger: authoritative record of holdings and cost basis
//!
//! The ledger is the only stateful entity in the core. It is mutated by
//! exactly two operations, `apply_buy` and `apply_sell`, plus `reset` after
//! a full exit. Cost basis uses average-cost accounting: all held units of
//! an outcome share one blended purchase price, and selling never changes
//! the average cost of the remaining shares.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::{AgentError, Result};
use crate::common::types::{Outcome, Side};

/// One entry in the append-only trade log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEntry {
    /// An executed trade
    Trade {
        timestamp: DateTime<Utc>,
        outcome: Outcome,
        side: Side,
        shares: Decimal,
        price: Decimal,
        /// Cash moved: cost for buys, proceeds for sells
        cash: Decimal,
    },
    /// Marker written when the position is reset after a full exit
    Reset { timestamp: DateTime<Utc> },
}

/// Share balances, cost basis and cash counters for one binary market.
///
/// Invariants:
/// - share counts never go negative; overselling is an error, not a clamp
/// - `avg_cost` is zero whenever the corresponding share count is zero
/// - `total_invested` and `total_withdrawn` only ever increase (until reset)
/// - realized P&L is always derived from the counters, never stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    shares_yes: Decimal,
    shares_no: Decimal,
    avg_cost_yes: Decimal,
    avg_cost_no: Decimal,
    entry_probability: Option<Decimal>,
    entry_timestamp: Option<DateTime<Utc>>,
    total_invested: Decimal,
    total_withdrawn: Decimal,
    trade_log: Vec<LedgerEntry>,
}

impl Position {
    /// Create an empty position
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares held of an outcome
    pub fn shares(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.shares_yes,
            Outcome::No => self.shares_no,
        }
    }

    /// Volume-weighted average price paid per unit currently held.
    /// Zero when nothing is held of that outcome.
    pub fn avg_cost(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.avg_cost_yes,
            Outcome::No => self.avg_cost_no,
        }
    }

    /// Cumulative currency spent on buys
    pub fn total_invested(&self) -> Decimal {
        self.total_invested
    }

    /// Cumulative currency received from sells
    pub fn total_withdrawn(&self) -> Decimal {
        self.total_withdrawn
    }

    /// Net cash currently deployed in the market
    pub fn net_cash_invested(&self) -> Decimal {
        self.total_invested - self.total_withdrawn
    }

    /// Probability at first acquisition
    pub fn entry_probability(&self) -> Option<Decimal> {
        self.entry_probability
    }

    /// Timestamp of first acquisition
    pub fn entry_timestamp(&self) -> Option<DateTime<Utc>> {
        self.entry_timestamp
    }

    /// Full trade history, including reset markers
    pub fn trade_log(&self) -> &[LedgerEntry] {
        &self.trade_log
    }

    /// Whether any shares are held on either side
    pub fn has_position(&self) -> bool {
        self.shares_yes > Decimal::ZERO || self.shares_no > Decimal::ZERO
    }

    /// Whether both sides are held simultaneously.
    ///
    /// Derived on demand from the share counts rather than stored, so it
    /// cannot diverge from the holdings.
    pub fn is_hedged(&self) -> bool {
        self.shares_yes > Decimal::ZERO && self.shares_no > Decimal::ZERO
    }

    /// Record a buy of `shares` outcome tokens at `price`.
    ///
    /// Updates the weighted-average cost basis and the invested counter.
    /// The first buy snapshots the entry probability (the price paid) and
    /// entry timestamp; later buys leave the snapshot untouched.
    pub fn apply_buy(&mut self, outcome: Outcome, shares: Decimal, price: Decimal) -> Result<()> {
        validate_shares(shares)?;
        validate_price(price)?;

        let cost = shares * price;
        let held = self.shares(outcome);
        let avg = self.avg_cost(outcome);
        let new_avg = (held * avg + cost) / (held + shares);

        match outcome {
            Outcome::Yes => {
                self.shares_yes = held + shares;
                self.avg_cost_yes = new_avg;
            }
            Outcome::No => {
                self.shares_no = held + shares;
                self.avg_cost_no = new_avg;
            }
        }
        self.total_invested += cost;

        if self.entry_timestamp.is_none() {
            self.entry_timestamp = Some(Utc::now());
            self.entry_probability = Some(price);
        }

        self.trade_log.push(LedgerEntry::Trade {
            timestamp: Utc::now(),
            outcome,
            side: Side::Buy,
            shares,
            price,
            cash: cost,
        });

        Ok(())
    }

    /// Record a sale of `shares` outcome tokens at `price`, returning the
    /// proceeds so callers can immediately reinvest them.
    ///
    /// Fails with `InsufficientShares` when the request exceeds holdings;
    /// the position is left unchanged in that case. The average cost of the
    /// remaining shares is unaffected (average-cost accounting, not
    /// FIFO/LIFO); it drops to zero when the side is emptied.
    pub fn apply_sell(
        &mut self,
        outcome: Outcome,
        shares: Decimal,
        price: Decimal,
    ) -> Result<Decimal> {
        validate_shares(shares)?;
        validate_price(price)?;

        let held = self.shares(outcome);
        if shares > held {
            return Err(AgentError::InsufficientShares {
                outcome,
                requested: shares,
                held,
            });
        }

        let proceeds = shares * price;
        let remaining = held - shares;

        match outcome {
            Outcome::Yes => {
                self.shares_yes = remaining;
                if remaining.is_zero() {
                    self.avg_cost_yes = Decimal::ZERO;
                }
            }
            Outcome::No => {
                self.shares_no = remaining;
                if remaining.is_zero() {
                    self.avg_cost_no = Decimal::ZERO;
                }
            }
        }
        self.total_withdrawn += proceeds;

        self.trade_log.push(LedgerEntry::Trade {
            timestamp: Utc::now(),
            outcome,
            side: Side::Sell,
            shares,
            price,
            cash: proceeds,
        });

        Ok(proceeds)
    }

    /// Clear shares, cost bases, counters and the entry snapshot.
    ///
    /// The trade log is preserved for audit; a reset marker is appended
    /// instead of truncating history.
    pub fn reset(&mut self) {
        self.shares_yes = Decimal::ZERO;
        self.shares_no = Decimal::ZERO;
        self.avg_cost_yes = Decimal::ZERO;
        self.avg_cost_no = Decimal::ZERO;
        self.entry_probability = None;
        self.entry_timestamp = None;
        self.total_invested = Decimal::ZERO;
        self.total_withdrawn = Decimal::ZERO;
        self.trade_log.push(LedgerEntry::Reset {
            timestamp: Utc::now(),
        });
    }
}

fn validate_shares(shares: Decimal) -> Result<()> {
    if shares <= Decimal::ZERO {
        return Err(AgentError::InvalidInput(format!(
            "share quantity must be positive, got {}",
            shares
        )));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO || price > Decimal::ONE {
        return Err(AgentError::InvalidInput(format!(
            "price must be in [0, 1], got {}",
            price
        )));
    }
    Ok(())
}
