//! The 52-card deck: build, shuffle, split.
//!
//! A `Deck` can only be obtained from `Deck::standard` or the validating
//! `Deck::from_cards`, so it always holds exactly 52 unique cards. That makes
//! an uneven split impossible by construction.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::card::{Card, Rank, Suit};
use crate::core::rng::{shuffle, RandomSource};
use crate::error::DeckError;
use crate::zones::Hand;

/// Number of cards in a standard deck (no jokers).
pub const DECK_SIZE: usize = 52;

/// Cards each player is dealt.
pub const HALF_DECK: usize = DECK_SIZE / 2;

/// An ordered, validated 52-card deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard deck in suit-then-rank order.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Validate an arbitrary card list as a deck.
    ///
    /// Refuses anything that is not exactly 52 unique cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Shuffle in place with Fisher–Yates.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
        trace!(top = %self.cards[0], "deck shuffled");
    }

    /// Split into two hands: indices 0-25 and 26-51.
    ///
    /// Consumes the deck; afterwards the cards live only in the hands.
    #[must_use]
    pub fn split(mut self) -> (Hand, Hand) {
        let second = self.cards.split_off(HALF_DECK);
        (Hand::from_cards(self.cards), Hand::from_cards(second))
    }

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
}
