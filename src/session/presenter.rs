//! The boundary between a running game and whatever shows it.
//!
//! The engine never blocks and never prints. A `Session` turns engine events
//! into `Presenter` calls and asks the presenter whenever it needs a decision
//! from the people at the table.

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::error::Result;
use crate::rules::{GameResult, RoundOutcome};

/// Answer to "play the next round?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Play one more round, then ask again.
    Next,
    /// Stop asking and run the game to its end.
    RunToEnd,
}

/// Renders a game and supplies the decisions the engine cannot make.
///
/// ## Implementation Notes
///
/// - `player_name`: a blank answer is asked for again
/// - `advance`: only called when the session is not auto-running
/// - `pause`: called between rounds while auto-running, for pacing
pub trait Presenter {
    /// Ask for a player's display name.
    fn player_name(&mut self, player: PlayerId) -> Result<String>;

    /// A new round began.
    fn round_started(&mut self, _round: u32) {}

    /// Both players turned over a comparison card.
    fn revealed(&mut self, names: &PlayerMap<String>, cards: &PlayerMap<Card>);

    /// The last reveal tied.
    fn war(&mut self, depth: u32);

    /// A player could not supply a card.
    fn ran_out(&mut self, name: &str);

    /// The round is over; `outcome` lists every card played.
    fn round_resolved(&mut self, names: &PlayerMap<String>, outcome: &RoundOutcome);

    /// Decide whether to keep stepping round by round.
    fn advance(&mut self) -> Result<Advance>;

    /// Delay between auto-run rounds.
    fn pause(&mut self) {}

    /// The game has a winner.
    fn game_over(&mut self, result: &GameResult);

    /// Offer a rematch.
    fn play_again(&mut self) -> Result<bool>;
}
