//! Cards, the standard deck, and their ASCII rendering.
//!
//! ## Key Types
//!
//! - `Card`: immutable rank + suit, compared by War value
//! - `Deck`: validated 52-card deck with Fisher–Yates shuffle and split
//! - `render`: fixed-width ASCII faces for presenters

pub mod card;
pub mod deck;
pub mod render;

pub use card::{Card, Rank, RankCategory, Suit};
pub use deck::{Deck, DECK_SIZE, HALF_DECK};
pub use render::{render, render_pair, short_label, CARD_HEIGHT, CARD_WIDTH};
