//! Where cards live during a game.
//!
//! ## Key Types
//!
//! - `Hand`: one player's FIFO queue, draw from the front, win onto the back
//! - `Pool`: the cards contested in the current round
//!
//! After the deal every card is in exactly one hand or in the pool.

pub mod hand;
pub mod pool;

pub use hand::Hand;
pub use pool::Pool;
