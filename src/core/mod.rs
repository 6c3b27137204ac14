//! Core types: players, randomness, configuration.
//!
//! Everything here is independent of the rules of War; the engine in
//! `games::war` builds on these.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{shuffle, GameRng, RandomSource};
