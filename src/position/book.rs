//! Durable position book
//!
//! `PositionBook` pairs the in-memory ledger with its store and commits
//! every mutation persist-first: the change is applied to a copy, the copy
//! is saved, and only then does it become the live state. A failed save
//! therefore leaves memory and disk agreeing on the pre-mutation snapshot,
//! and the error propagates to the caller.

use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::common::traits::PositionStore;
use crate::common::types::Outcome;
use crate::position::Position;

/// Ledger plus persistence, the single mutation point for position state
pub struct PositionBook<S: PositionStore> {
    position: Position,
    store: S,
}

impl<S: PositionStore> PositionBook<S> {
    /// Open the book, restoring the last persisted snapshot if one exists
    pub fn open(store: S) -> Result<Self> {
        let position = store.load()?.unwrap_or_default();
        Ok(Self { position, store })
    }

    /// Read-only view of the current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Buy shares and durably record the mutation
    pub fn buy(&mut self, outcome: Outcome, shares: Decimal, price: Decimal) -> Result<()> {
        let mut next = self.position.clone();
        next.apply_buy(outcome, shares, price)?;
        self.store.save(&next)?;
        self.position = next;
        Ok(())
    }

    /// Sell shares and durably record the mutation, returning proceeds
    pub fn sell(&mut self, outcome: Outcome, shares: Decimal, price: Decimal) -> Result<Decimal> {
        let mut next = self.position.clone();
        let proceeds = next.apply_sell(outcome, shares, price)?;
        self.store.save(&next)?;
        self.position = next;
        Ok(proceeds)
    }

    /// Reset the position after a full exit and durably record it
    pub fn reset(&mut self) -> Result<()> {
        let mut next = self.position.clone();
        next.reset();
        self.store.save(&next)?;
        self.position = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::AgentError;
    use crate::position::store::MemoryStore;
    use rust_decimal_macros::dec;

    /// Store that refuses every save, for commit-discipline tests
    struct BrokenStore;

    impl PositionStore for BrokenStore {
        fn save(&self, _position: &Position) -> Result<()> {
            Err(AgentError::Persistence("disk full".to_string()))
        }

        fn load(&self) -> Result<Option<Position>> {
            Ok(None)
        }
    }

    #[test]
    fn test_open_restores_snapshot() {
        let store = MemoryStore::new();
        let mut seeded = Position::new();
        seeded.apply_buy(Outcome::Yes, dec!(100), dec!(0.75)).unwrap();
        store.save(&seeded).unwrap();

        let book = PositionBook::open(store).unwrap();
        assert_eq!(book.position(), &seeded);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let mut book = PositionBook::open(MemoryStore::new()).unwrap();
        book.buy(Outcome::Yes, dec!(1250), dec!(0.80)).unwrap();
        let proceeds = book.sell(Outcome::Yes, dec!(250), dec!(0.86)).unwrap();
        assert_eq!(proceeds, dec!(215.00));

        // a fresh book over the same store sees the committed state
        let position = book.position().clone();
        let store = MemoryStore::new();
        store.save(&position).unwrap();
        let reopened = PositionBook::open(store).unwrap();
        assert_eq!(reopened.position(), &position);
    }

    #[test]
    fn test_failed_save_rolls_back_memory() {
        let mut book = PositionBook::open(BrokenStore).unwrap();

        let err = book.buy(Outcome::Yes, dec!(10), dec!(0.50)).unwrap_err();
        assert!(matches!(err, AgentError::Persistence(_)));
        assert!(!book.position().has_position());
        assert_eq!(book.position().total_invested(), dec!(0));
    }

    #[test]
    fn test_invalid_input_does_not_touch_store() {
        // validation failures surface before any save attempt
        let mut book = PositionBook::open(MemoryStore::new()).unwrap();
        assert!(book.buy(Outcome::Yes, dec!(-1), dec!(0.50)).is_err());
        assert!(!book.position().has_position());
    }
}
