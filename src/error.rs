//! Error types for rust-war.
//!
//! The engine itself has no recoverable failures: an empty hand is a normal
//! game signal. Errors only arise when validating a deck or when a
//! presenter's I/O fails.

use thiserror::Error;

use crate::cards::Card;

/// Deck validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must hold exactly {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Invalid deck: {0}")]
    Deck(#[from] DeckError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
