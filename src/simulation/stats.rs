//! Aggregate statistics over many headless games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{PlayerId, PlayerMap};
use crate::rules::{GameResult, RoundOutcome};

/// Running totals for a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games completed.
    pub games: u64,

    /// Games won per seat.
    pub wins: PlayerMap<u64>,

    /// Rounds across all games.
    pub total_rounds: u64,

    /// Shortest and longest games, in rounds.
    pub min_rounds: Option<u32>,
    pub max_rounds: Option<u32>,

    /// War escalations across all games.
    pub total_wars: u64,

    /// Longest chain of escalations seen in one round.
    pub deepest_war: u32,

    /// Rounds that ended because a hand ran dry mid-round.
    pub exhaustion_rounds: u64,

    /// Rounds keyed by number of escalations (0 = no war).
    pub war_depths: FxHashMap<u32, u64>,
}

impl SimulationStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round into the totals.
    pub fn record_round(&mut self, outcome: &RoundOutcome) {
        *self.war_depths.entry(outcome.wars).or_insert(0) += 1;
        if outcome.ran_out().is_some() {
            self.exhaustion_rounds += 1;
        }
    }

    /// Fold one finished game into the totals.
    pub fn record_game(&mut self, result: &GameResult) {
        self.games += 1;
        self.wins[result.winner] += 1;
        self.total_rounds += u64::from(result.rounds);
        self.total_wars += u64::from(result.wars);
        self.deepest_war = self.deepest_war.max(result.deepest_war);
        self.min_rounds = Some(self.min_rounds.map_or(result.rounds, |m| m.min(result.rounds)));
        self.max_rounds = Some(self.max_rounds.map_or(result.rounds, |m| m.max(result.rounds)));
    }

    /// Mean rounds per game, or 0.0 before any game.
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.games as f64
    }

    /// Fraction of games won by a seat.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[player] as f64 / self.games as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:        {}", self.games)?;
        for (player, wins) in self.wins.iter() {
            writeln!(f, "{} wins: {} ({:.1}%)", player, wins, self.win_rate(player) * 100.0)?;
        }
        writeln!(
            f,
            "rounds:       mean {:.1}, min {}, max {}",
            self.mean_rounds(),
            self.min_rounds.unwrap_or(0),
            self.max_rounds.unwrap_or(0)
        )?;
        writeln!(f, "wars:         {} (deepest chain {})", self.total_wars, self.deepest_war)?;
        writeln!(f, "ran dry:      {} rounds", self.exhaustion_rounds)?;

        let mut depths: Vec<_> = self.war_depths.iter().collect();
        depths.sort_unstable();
        for (depth, count) in depths {
            writeln!(f, "  depth {:>2}: {}", depth, count)?;
        }
        Ok(())
    }
}
