//! Unified types shared across the agent

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One of the two resolutions of a binary market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    /// The opposite outcome token of the same market
    pub fn opposite(&self) -> Outcome {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Yes => write!(f, "YES"),
            Outcome::No => write!(f, "NO"),
        }
    }
}

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Two-sided quote for a binary market.
///
/// The YES price doubles as the market's implied probability. The two
/// prices should sum to roughly 1; the ledger does not enforce this, the
/// polling loop checks `is_coherent` before acting on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrices {
    /// Price of the YES outcome token (0.00 to 1.00)
    pub yes: Decimal,
    /// Price of the NO outcome token (0.00 to 1.00)
    pub no: Decimal,
    /// When this quote was fetched
    pub fetched_at: DateTime<Utc>,
}

impl MarketPrices {
    pub fn new(yes: Decimal, no: Decimal) -> Self {
        Self {
            yes,
            no,
            fetched_at: Utc::now(),
        }
    }

    /// Price of a specific outcome token
    pub fn price_of(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.yes,
            Outcome::No => self.no,
        }
    }

    /// Implied probability that the market resolves YES
    pub fn probability(&self) -> Decimal {
        self.yes
    }

    /// Sum of both sides (≈ 1 on a healthy binary market)
    pub fn sum(&self) -> Decimal {
        self.yes + self.no
    }

    /// Whether both prices are in range and sum to approximately 1
    pub fn is_coherent(&self) -> bool {
        let in_range = |p: Decimal| p >= Decimal::ZERO && p <= Decimal::ONE;
        in_range(self.yes)
            && in_range(self.no)
            && self.sum() >= dec!(0.95)
            && self.sum() <= dec!(1.05)
    }
}

/// Result of a trade execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeFill {
    /// Number of shares actually filled
    pub filled_shares: Decimal,
    /// Average price across the fill
    pub avg_fill_price: Decimal,
}
