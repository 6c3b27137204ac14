//! Playing cards.
//!
//! A `Card` is an immutable value: its rank fixes its comparison value at
//! construction and nothing can change it afterwards. Cards carry no owner;
//! whichever hand or pool holds a card owns it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The four suits. Suits never affect comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// The thirteen ranks, discriminants equal to War values (Ace high).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Comparison value: 2-10 literal, Jack 11, Queen 12, King 13, Ace 14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Display category of this rank.
    #[must_use]
    pub const fn category(self) -> RankCategory {
        match self {
            Rank::Jack => RankCategory::Jack,
            Rank::Queen => RankCategory::Queen,
            Rank::King => RankCategory::King,
            Rank::Ace => RankCategory::Ace,
            _ => RankCategory::Number,
        }
    }

    /// Short label used on card faces: "2".."10", "J", "Q", "K", "A".
    #[must_use]
    pub fn label(self) -> String {
        match self.category() {
            RankCategory::Number => self.value().to_string(),
            RankCategory::Jack => "J".to_string(),
            RankCategory::Queen => "Q".to_string(),
            RankCategory::King => "K".to_string(),
            RankCategory::Ace => "A".to_string(),
        }
    }
}

/// How a rank is shown. Display only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankCategory {
    Number,
    Jack,
    Queen,
    King,
    Ace,
}

/// An immutable playing card.
///
/// Equality is structural (rank and suit); `cmp_value` and the
/// `Ord` helpers compare War values only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// War value (2-14).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn category(&self) -> RankCategory {
        self.rank.category()
    }

    /// Compare two cards by War value, ignoring suit.
    #[must_use]
    pub fn cmp_value(&self, other: &Card) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// True when the two cards would start a war.
    #[must_use]
    pub fn ties(&self, other: &Card) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            RankCategory::Number => write!(f, "{} of {}", self.value(), self.suit),
            category => write!(f, "{:?} of {}", category, self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);

        let values: Vec<u8> = Rank::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, (2..=14).collect::<Vec<u8>>());
    }

    #[test]
    fn test_categories() {
        assert_eq!(Rank::Ten.category(), RankCategory::Number);
        assert_eq!(Rank::Jack.category(), RankCategory::Jack);
        assert_eq!(Rank::Ace.category(), RankCategory::Ace);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rank::Two.label(), "2");
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Queen.label(), "Q");
    }

    #[test]
    fn test_compare_ignores_suit() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let two = Card::new(Rank::Two, Suit::Spades);
        let other_ace = Card::new(Rank::Ace, Suit::Hearts);

        assert_eq!(ace.cmp_value(&two), Ordering::Greater);
        assert_eq!(two.cmp_value(&ace), Ordering::Less);
        assert!(ace.ties(&other_ace));
        assert_ne!(ace, other_ace);
    }

    #[test]
    fn test_comparison_is_pure() {
        let card = Card::new(Rank::Nine, Suit::Diamonds);
        let before = card;
        for _ in 0..3 {
            let _ = card.cmp_value(&Card::new(Rank::Four, Suit::Clubs));
            let _ = card.to_string();
        }
        assert_eq!(card, before);
        assert_eq!(card.value(), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Seven, Suit::Hearts).to_string(), "7 of Hearts");
        assert_eq!(Card::new(Rank::King, Suit::Spades).to_string(), "King of Spades");
    }

    #[test]
    fn test_suits() {
        assert_eq!(Suit::Hearts.symbol(), '♥');
        assert_eq!(Suit::Spades.symbol(), '♠');
        assert_eq!(Suit::Clubs.to_string(), "Clubs");
    }
}
