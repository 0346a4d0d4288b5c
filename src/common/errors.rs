//! Error types for the application

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Outcome;

/// Result type alias using our AgentError
pub type Result<T> = std::result::Result<T, AgentError>;

/// Main error type for agent operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// Malformed arguments to ledger or hedge operations
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Sell request exceeds current holdings
    #[error("insufficient {outcome} shares: requested {requested}, held {held}")]
    InsufficientShares {
        outcome: Outcome,
        requested: Decimal,
        held: Decimal,
    },

    /// Non-positive price where a division is required
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Strategy configuration violates an ordering or range invariant
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Price feed could not produce a usable quote
    #[error("price unavailable: {0}")]
    PriceUnavailable(String),

    /// Trade execution failed at the collaborator
    #[error("trade execution failed: {0}")]
    Execution(String),

    /// Sell leg of a hedge committed but the buy leg failed.
    ///
    /// The position is left unhedged with the sale proceeds withdrawn from
    /// the market. Callers must not replay the buy with these proceeds;
    /// the next evaluation recomputes from current holdings.
    #[error(
        "hedge incomplete: sold {shares_sold} shares for {proceeds} but the buy leg failed: {reason}"
    )]
    HedgeIncomplete {
        shares_sold: Decimal,
        proceeds: Decimal,
        reason: String,
    },

    /// Persisting the position snapshot failed; the mutation is not committed
    #[error("persistence error: {0}")]
    Persistence(String),

    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Market not found
    #[error("market not found: {0}")]
    MarketNotFound(String),
}
