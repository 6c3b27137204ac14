//! Game and session configuration.
//!
//! The engine itself takes no configuration: War has fixed rules. These
//! settings control how a session deals games and how a presenter paces
//! them. The console binary fills a `GameConfig` from its command line.

use std::time::Duration;

use super::player::{PlayerId, PlayerMap};

/// Default delay between rounds when a game runs to the end on its own.
pub const DEFAULT_ROUND_PACE: Duration = Duration::from_millis(50);

/// Default delay between letters of the war banner.
pub const DEFAULT_WAR_PACE: Duration = Duration::from_millis(250);

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the session RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Run every game to completion without asking the presenter to advance.
    pub auto_run: bool,

    /// Delay between rounds while auto-running.
    pub round_pace: Duration,

    /// Delay between letters of the war banner.
    pub war_pace: Duration,

    /// Use terminal colors.
    pub color: bool,

    /// Names fixed up front. Missing names are requested from the presenter.
    pub player_names: PlayerMap<Option<String>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            auto_run: false,
            round_pace: DEFAULT_ROUND_PACE,
            war_pace: DEFAULT_WAR_PACE,
            color: true,
            player_names: PlayerMap::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the session RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_auto_run(mut self, auto_run: bool) -> Self {
        self.auto_run = auto_run;
        self
    }

    #[must_use]
    pub fn with_round_pace(mut self, pace: Duration) -> Self {
        self.round_pace = pace;
        self
    }

    #[must_use]
    pub fn with_war_pace(mut self, pace: Duration) -> Self {
        self.war_pace = pace;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Fix a player's name. Blank names are ignored.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.player_names[player] = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}
