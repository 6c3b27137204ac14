//! What the engine reports: per-step events, round outcomes, game results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Position in the turn state machine.
///
/// `Idle → RoundStart → Reveal → (War → Reveal)* → RoundResolve → Idle`,
/// or `→ GameOver` once a hand is empty after a resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between rounds.
    Idle,
    /// Both players about to draw their first card of the round.
    RoundStart,
    /// A comparison pair is on the table.
    Reveal,
    /// The last pair tied; stakes and new reveals are about to be drawn.
    War,
    /// The round has a winner and the pool is about to be awarded.
    RoundResolve,
    /// Terminal. One player holds every card.
    GameOver,
}

/// Why a card entered the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayKind {
    /// Face-up card used for comparison.
    Reveal,
    /// Face-down war stake.
    Stake,
}

/// A single card played into the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
    pub kind: PlayKind,
}

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The winner revealed the higher card.
    HigherCard { winning: Card, losing: Card },
    /// The loser could not supply a card.
    OutOfCards { loser: PlayerId },
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: u32,

    /// Every card played, in play order. Most rounds are a single pair.
    pub plays: SmallVec<[Play; 6]>,

    /// War escalations in this round.
    pub wars: u32,

    /// Who took the pool.
    pub winner: PlayerId,

    pub resolution: Resolution,

    /// Hand sizes after the pool was awarded.
    pub hand_sizes: PlayerMap<usize>,
}

impl RoundOutcome {
    /// Number of cards the winner collected.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.plays.len()
    }

    /// Cards played by one player, in order.
    pub fn plays_by(&self, player: PlayerId) -> impl Iterator<Item = &Play> {
        self.plays.iter().filter(move |p| p.player == player)
    }

    /// True when the round ended because a hand ran dry.
    #[must_use]
    pub fn ran_out(&self) -> Option<PlayerId> {
        match self.resolution {
            Resolution::OutOfCards { loser } => Some(loser),
            Resolution::HigherCard { .. } => None,
        }
    }
}

/// One state-machine transition, as seen by a presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round began.
    Started { round: u32 },
    /// Both players revealed a comparison card.
    Revealed { cards: PlayerMap<Card> },
    /// The reveal tied; `depth` counts escalations within this round.
    War { depth: u32 },
    /// A player could not supply a card. The opponent takes the pool.
    RanOut { player: PlayerId },
    /// The round is over and the pool has been awarded.
    Resolved(RoundOutcome),
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Cards in the winner's hand at the end; the whole deck.
    pub hand_size: usize,
    pub rounds: u32,
    pub wars: u32,
    /// Longest chain of escalations in a single round.
    pub deepest_war: u32,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
