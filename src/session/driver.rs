//! Drive games through a presenter until the players stop.

use tracing::{debug, info};

use super::presenter::{Advance, Presenter};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::Result;
use crate::games::war::WarGameBuilder;
use crate::rules::{GameResult, RoundEvent};

/// Results of every game played in a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Seed of the session RNG; replaying with it reproduces every deal.
    pub seed: u64,
    pub games: Vec<GameResult>,
}

impl SessionSummary {
    /// Games won by a seat.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> usize {
        self.games.iter().filter(|g| g.is_winner(player)).count()
    }
}

/// A sequence of games sharing one presenter and one RNG.
///
/// Each game receives a forked RNG stream, so a session seed reproduces the
/// whole session.
pub struct Session<P: Presenter> {
    presenter: P,
    config: GameConfig,
    rng: GameRng,
}

impl<P: Presenter> Session<P> {
    pub fn new(presenter: P, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            presenter,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Play games until the presenter declines a rematch.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary {
            seed: self.rng.seed(),
            games: Vec::new(),
        };
        info!(seed = summary.seed, "session started");

        loop {
            summary.games.push(self.play_game()?);
            if !self.presenter.play_again()? {
                break;
            }
        }

        info!(games = summary.games.len(), "session finished");
        Ok(summary)
    }

    /// Deal and play one game to completion.
    pub fn play_game(&mut self) -> Result<GameResult> {
        let names = self.collect_names()?;
        let rng = self.rng.fork();
        info!(seed = rng.seed(), "dealing new game");

        let (first, second) = names.clone().into_pair();
        let mut game = WarGameBuilder::new()
            .player_name(PlayerId::ONE, first)
            .player_name(PlayerId::TWO, second)
            .deal(rng);

        let mut run_to_end = self.config.auto_run;
        while let Some(event) = game.step() {
            match event {
                RoundEvent::Started { round } => self.presenter.round_started(round),
                RoundEvent::Revealed { cards } => self.presenter.revealed(&names, &cards),
                RoundEvent::War { depth } => self.presenter.war(depth),
                RoundEvent::RanOut { player } => self.presenter.ran_out(&names[player]),
                RoundEvent::Resolved(outcome) => {
                    self.presenter.round_resolved(&names, &outcome);
                    if game.is_over() {
                        break;
                    }
                    if run_to_end {
                        self.presenter.pause();
                    } else if self.presenter.advance()? == Advance::RunToEnd {
                        debug!(round = outcome.round, "running game to the end");
                        run_to_end = true;
                    }
                }
            }
        }

        let result = game.result().expect("the event loop only ends with the game");
        self.presenter.game_over(&result);
        Ok(result)
    }

    /// Names from the config, otherwise asked for until non-blank.
    fn collect_names(&mut self) -> Result<PlayerMap<String>> {
        let mut names = PlayerMap::<String>::default();
        for player in PlayerId::all() {
            names[player] = match &self.config.player_names[player] {
                Some(name) => name.clone(),
                None => loop {
                    let answer = self.presenter.player_name(player)?;
                    let trimmed = answer.trim();
                    if !trimmed.is_empty() {
                        break trimmed.to_string();
                    }
                    debug!(%player, "blank name, asking again");
                },
            };
        }
        Ok(names)
    }
}
