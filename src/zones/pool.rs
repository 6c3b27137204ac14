//! The contested pool for a single round.
//!
//! Every card played in a round, war stakes included, sits here until the
//! round resolves. The pool is shuffled before it is handed over so that two
//! hands with the same residual cards do not fall into a repeating cycle.

use crate::cards::Card;
use crate::core::rng::{shuffle, RandomSource};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a played card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in play order (until shuffled).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the pool and empty it, yielding the cards in their new order.
    ///
    /// The pool keeps its allocation for the next round.
    pub fn award<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> std::vec::Drain<'_, Card> {
        shuffle(&mut self.cards, rng);
        self.cards.drain(..)
    }
}
