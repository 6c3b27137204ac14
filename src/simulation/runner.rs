//! Headless batches of games.

use tracing::{debug, info};

use super::stats::SimulationStats;
use crate::core::GameRng;
use crate::games::war::WarGameBuilder;

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u64,

    /// Seed for the batch RNG. Each game gets a forked stream.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { games: 1000, seed: 0 }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Play `config.games` complete games and collect statistics.
pub fn simulate(config: &SimulationConfig) -> SimulationStats {
    let mut rng = GameRng::new(config.seed);
    let mut stats = SimulationStats::new();
    info!(games = config.games, seed = config.seed, "simulation started");

    for index in 0..config.games {
        let mut game = WarGameBuilder::new().deal(rng.fork());
        while !game.is_over() {
            let outcome = game.play_round();
            stats.record_round(&outcome);
        }

        let result = game.result().expect("loop only exits once the game is over");
        debug!(game = index, winner = %result.winner, rounds = result.rounds, "simulated game");
        stats.record_game(&result);
    }

    info!(mean_rounds = stats.mean_rounds(), "simulation finished");
    stats
}
