//! # rust-war
//!
//! A turn-resolution engine for the two-player card game War, plus the
//! session loop and terminal presenter that play it.
//!
//! ## Design Principles
//!
//! 1. **Conservation**: every card is in exactly one hand or in the pool.
//!    The engine checks this after every transition in debug builds.
//!
//! 2. **Explicit State Machine**: a round advances one transition per
//!    `WarGame::step`, so presenters can pause anywhere.
//!
//! 3. **Injectable Randomness**: all shuffling goes through `RandomSource`.
//!    A seed reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: players, seat maps, RNG, configuration
//! - `cards`: cards, the 52-card deck, ASCII rendering
//! - `zones`: hands and the contested pool
//! - `rules`: phases, round outcomes, game results
//! - `games`: the War engine
//! - `session`: presenter boundary and the replay loop
//! - `simulation`: headless batches of games

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod session;
pub mod simulation;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap, RandomSource};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::zones::{Hand, Pool};

pub use crate::rules::{GameResult, Phase, RoundEvent, RoundOutcome};

pub use crate::games::war::{WarGame, WarGameBuilder};

pub use crate::session::{Advance, ConsolePresenter, Presenter, Session, SessionSummary};

pub use crate::simulation::{simulate, SimulationConfig, SimulationStats};

pub use crate::error::{DeckError, Result, WarError};
