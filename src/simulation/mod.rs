//! Batch simulation of complete games.
//!
//! Plays many seeded games without a presenter and aggregates how long they
//! last, who wins, and how deep wars go.

mod runner;
mod stats;

pub use runner::{simulate, SimulationConfig};
pub use stats::SimulationStats;
