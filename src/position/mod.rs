//! Position state: ledger, durable book, persistence and P&L metrics
//!
//! The ledger ([`Position`]) is the authoritative record of holdings and
//! cost basis. [`PositionBook`] is how the rest of the agent mutates it:
//! every buy, sell or reset is persisted before it is considered committed.
//! P&L metrics are derived on demand in [`pnl`]; nothing stores a figure
//! that could diverge from the counters.

pub mod book;
pub mod ledger;
pub mod pnl;
pub mod store;

pub use book::PositionBook;
pub use ledger::{LedgerEntry, Position};
pub use pnl::{
    locked_pnl, outcome_scenarios, realized_pnl, roi, unrealized_pnl, OutcomeScenarios, PnlReport,
};
pub use store::{JsonFileStore, MemoryStore};
