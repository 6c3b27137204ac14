//! War: two players, one shuffled deck, highest card takes the pool.
//!
//! - Each round both players reveal their front card; higher value wins
//! - Ties escalate into a war: one stake and one new reveal per side,
//!   repeated until the tie breaks or a hand runs dry
//! - The winner's pool is shuffled onto the back of their hand
//! - The game ends when one player holds every card

mod game;

pub use game::{WarGame, WarGameBuilder};
