//! A player's hand: a FIFO queue of cards.
//!
//! Cards are drawn from the front and winnings are appended to the back, so
//! cards won early come round again before cards won late.

use std::collections::VecDeque;

use crate::cards::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand whose front is `cards[0]`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card, or `None` when the hand is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append cards to the back, preserving their order.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
