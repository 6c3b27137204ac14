//! The vocabulary of a War game: phases, plays, and outcomes.
//!
//! The state machine itself lives in `games::war`; this module only holds
//! the values it reports to callers.

pub mod outcome;

pub use outcome::{GameResult, Phase, Play, PlayKind, Resolution, RoundEvent, RoundOutcome};
