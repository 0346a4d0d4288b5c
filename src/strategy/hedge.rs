//! Hedge sizing arithmetic
//!
//! Given a fraction of current holdings to liquidate and the two live
//! prices, compute the exact share quantities for the rebalancing trade.
//! Sizing is pure arithmetic; executing the two legs (and handling the
//! non-atomicity between them) is the trade engine's job.

use rust_decimal::Decimal;

use crate::common::errors::{AgentError, Result};

/// Share quantities for one sell-then-buy rebalance
#[derive(Debug, Clone, PartialEq)]
pub struct HedgePlan {
    /// Shares of the held outcome to sell
    pub shares_to_sell: Decimal,
    /// Shares of the opposite outcome the proceeds can buy
    pub shares_to_buy: Decimal,
    /// Expected proceeds of the sell leg
    pub proceeds: Decimal,
    /// Price used for the sell leg
    pub sell_price: Decimal,
    /// Price used for the buy leg
    pub buy_price: Decimal,
}

/// Size a hedge: sell `sell_fraction` of the held shares at `sell_price`
/// and spend the proceeds on the opposite token at `buy_price`.
///
/// `sell_fraction` must lie in `[0, 1]` and `buy_price` must be strictly
/// positive (the proceeds are divided by it).
pub fn compute_hedge(
    shares_held: Decimal,
    sell_fraction: Decimal,
    sell_price: Decimal,
    buy_price: Decimal,
) -> Result<HedgePlan> {
    if shares_held < Decimal::ZERO {
        return Err(AgentError::InvalidInput(format!(
            "shares held must be non-negative, got {}",
            shares_held
        )));
    }
    if sell_fraction < Decimal::ZERO || sell_fraction > Decimal::ONE {
        return Err(AgentError::InvalidInput(format!(
            "sell fraction must be in [0, 1], got {}",
            sell_fraction
        )));
    }
    if sell_price < Decimal::ZERO || sell_price > Decimal::ONE {
        return Err(AgentError::InvalidInput(format!(
            "sell price must be in [0, 1], got {}",
            sell_price
        )));
    }
    if buy_price <= Decimal::ZERO {
        return Err(AgentError::InvalidPrice(format!(
            "buy price must be positive, got {}",
            buy_price
        )));
    }

    let shares_to_sell = shares_held * sell_fraction;
    let proceeds = shares_to_sell * sell_price;
    let shares_to_buy = proceeds / buy_price;

    Ok(HedgePlan {
        shares_to_sell,
        shares_to_buy,
        proceeds,
        sell_price,
        buy_price,
    })
}

/// The sell fraction that equalizes the two outcome payouts.
///
/// Selling fraction `f` of `s` held shares at `a` and buying the opposite
/// token at `b` leaves payouts `(1-f)·s` and `f·s·a/b`; they are equal at
/// `f = b / (a + b)`. When the sell price is above the average cost and the
/// two prices sum to at most 1, hedging at this fraction guarantees a
/// non-negative profit whichever way the market resolves. Selling more than
/// this shifts risk onto the original side instead of removing it.
pub fn balanced_fraction(sell_price: Decimal, buy_price: Decimal) -> Result<Decimal> {
    if sell_price <= Decimal::ZERO || buy_price <= Decimal::ZERO {
        return Err(AgentError::InvalidPrice(format!(
            "prices must be positive, got sell {} / buy {}",
            sell_price, buy_price
        )));
    }
    Ok(buy_price / (sell_price + buy_price))
}
