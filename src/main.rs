//! War - console card game
//!
//! Deals a shuffled deck between two players and plays War in the terminal,
//! or runs headless batches with `--simulate`.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rust_war::{simulate, ConsolePresenter, GameConfig, PlayerId, Session, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "The card game War, played in the terminal", long_about = None)]
struct Cli {
    /// Seed for the shuffle (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run every game to the end without waiting for key presses
    #[arg(long)]
    auto: bool,

    /// Delay between rounds while running to the end, in milliseconds
    #[arg(long, default_value_t = 50)]
    pace_ms: u64,

    /// Delay between letters of the WAR! banner, in milliseconds
    #[arg(long, default_value_t = 250)]
    war_pace_ms: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Name for player 1 (prompted if omitted)
    #[arg(long, value_name = "NAME")]
    player1: Option<String>,

    /// Name for player 2 (prompted if omitted)
    #[arg(long, value_name = "NAME")]
    player2: Option<String>,

    /// Play N games headless and print statistics instead
    #[arg(long, value_name = "N")]
    simulate: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_auto_run(self.auto)
            .with_round_pace(Duration::from_millis(self.pace_ms))
            .with_war_pace(Duration::from_millis(self.war_pace_ms))
            .with_color(!self.no_color);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(name) = &self.player1 {
            config = config.with_player_name(PlayerId::ONE, name);
        }
        if let Some(name) = &self.player2 {
            config = config.with_player_name(PlayerId::TWO, name);
        }
        config
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(games) = cli.simulate {
        let seed = cli.seed.unwrap_or_else(rand::random);
        let stats = simulate(&SimulationConfig::new().with_games(games).with_seed(seed));
        println!("seed:         {seed}");
        print!("{stats}");
        return Ok(());
    }

    let config = cli.game_config();
    let presenter = ConsolePresenter::stdout(&config);
    let mut session = Session::new(presenter, config);
    let summary = session.run().context("game session failed")?;

    info!(
        seed = summary.seed,
        games = summary.games.len(),
        player_one_wins = summary.wins(PlayerId::ONE),
        player_two_wins = summary.wins(PlayerId::TWO),
        "goodbye"
    );
    Ok(())
}

/// Log to stderr so the card display on stdout stays clean.
///
/// Defaults to warnings only; set `RUST_LOG=rust_war=debug` to follow rounds.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
