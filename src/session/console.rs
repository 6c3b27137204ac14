//! Terminal presenter.
//!
//! Prints ASCII cards side by side, spells out "WAR!" in red one letter at a
//! time, and reads single key presses through crossterm raw mode.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal;
use crossterm::{execute, queue};
use tracing::debug;

use super::presenter::{Advance, Presenter};
use crate::cards::{render_pair, short_label, Card, CARD_WIDTH};
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::error::Result;
use crate::rules::{GameResult, PlayKind, RoundOutcome};

const ROUND_SEPARATOR: &str = "= = = = = = = = = = =";

/// Column width of one card in a rendered pair, including its indent.
const COLUMN: usize = CARD_WIDTH / 2 + CARD_WIDTH;

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until a key is pressed.
///
/// Ctrl+C is reported as an interrupted error since raw mode swallows SIGINT.
fn read_key() -> io::Result<KeyCode> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
            }
            return Ok(key.code);
        }
    }
}

/// Presenter for an interactive terminal.
pub struct ConsolePresenter<W: Write> {
    out: W,
    round_pace: Duration,
    war_pace: Duration,
    color: bool,
}

impl ConsolePresenter<io::Stdout> {
    /// Presenter writing to stdout with pacing and color from `config`.
    pub fn stdout(config: &GameConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, config: &GameConfig) -> Self {
        Self {
            out,
            round_pace: config.round_pace,
            war_pace: config.war_pace,
            color: config.color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_war(&mut self) -> io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(Color::Red))?;
        }
        for letter in "WAR!".chars() {
            queue!(self.out, Print(letter))?;
            self.out.flush()?;
            thread::sleep(self.war_pace);
        }
        if self.color {
            queue!(self.out, ResetColor)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn print_reveal(
        &mut self,
        names: &PlayerMap<String>,
        cards: &PlayerMap<Card>,
    ) -> io::Result<()> {
        let label = format!("{} plays:", names[PlayerId::ONE]);
        let width = COLUMN.max(label.chars().count() + 1);
        writeln!(self.out, "{label:<width$}    {} plays:", names[PlayerId::TWO])?;
        for line in render_pair(&cards[PlayerId::ONE], &cards[PlayerId::TWO]) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn print_resolution(
        &mut self,
        names: &PlayerMap<String>,
        outcome: &RoundOutcome,
    ) -> io::Result<()> {
        if outcome.wars > 0 {
            for player in PlayerId::all() {
                let stakes: Vec<_> = outcome
                    .plays_by(player)
                    .filter(|p| p.kind == PlayKind::Stake)
                    .map(|p| short_label(&p.card))
                    .collect();
                if !stakes.is_empty() {
                    writeln!(self.out, "{} staked {}", names[player], stakes.join(" "))?;
                }
            }
        }

        writeln!(self.out, "{} wins the round", names[outcome.winner])?;
        if outcome.pool_size() > 2 {
            writeln!(self.out, "and takes {} cards", outcome.pool_size())?;
        }
        for (player, count) in outcome.hand_sizes.iter() {
            writeln!(self.out, "{} has {} cards remaining", names[player], count)?;
        }
        writeln!(self.out, "{ROUND_SEPARATOR}")?;
        self.out.flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn player_name(&mut self, player: PlayerId) -> Result<String> {
        write!(self.out, "Please enter a name for {player}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no name entered").into());
        }
        Ok(line)
    }

    fn revealed(&mut self, names: &PlayerMap<String>, cards: &PlayerMap<Card>) {
        if let Err(err) = self.print_reveal(names, cards) {
            debug!(%err, "failed to print reveal");
        }
    }

    fn war(&mut self, depth: u32) {
        debug!(depth, "printing war banner");
        if let Err(err) = self.print_war() {
            debug!(%err, "failed to print war banner");
        }
    }

    fn ran_out(&mut self, name: &str) {
        if let Err(err) = self.print_line(&format!("{name} has run out of cards!")) {
            debug!(%err, "failed to print ran-out notice");
        }
    }

    fn round_resolved(&mut self, names: &PlayerMap<String>, outcome: &RoundOutcome) {
        if let Err(err) = self.print_resolution(names, outcome) {
            debug!(%err, "failed to print round result");
        }
    }

    fn advance(&mut self) -> Result<Advance> {
        self.print_line("Press any key to continue.\nPress Enter to run the game to the end.")?;
        Ok(match read_key()? {
            KeyCode::Enter => Advance::RunToEnd,
            _ => Advance::Next,
        })
    }

    fn pause(&mut self) {
        thread::sleep(self.round_pace);
    }

    fn game_over(&mut self, result: &GameResult) {
        let text = format!(
            "{} wins with {} cards!! ({} rounds, {} wars)",
            result.winner_name, result.hand_size, result.rounds, result.wars
        );
        if let Err(err) = self.print_line(&text) {
            debug!(%err, "failed to print game result");
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        self.print_line("Press any key to exit.\nPress Enter to play again.")?;
        let again = read_key()? == KeyCode::Enter;
        if again {
            execute!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(again)
    }
}
