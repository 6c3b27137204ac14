//! ASCII card faces.
//!
//! Pure formatting: every function here takes cards by reference and returns
//! fresh strings. The engine never calls into this module.

use super::card::{Card, Rank};

/// Characters per rendered line.
pub const CARD_WIDTH: usize = 11;

/// Lines per rendered card.
pub const CARD_HEIGHT: usize = 9;

const BLANK: &str = "         ";
const BORDER: &str = "-----------";

/// Pip rows between the two corner labels, `S` marks a suit symbol.
type PipLayout = [&'static str; 5];

const SINGLE: PipLayout = [BLANK, BLANK, "    S    ", BLANK, BLANK];
const TWO: PipLayout = ["    S    ", BLANK, BLANK, BLANK, "    S    "];
const THREE: PipLayout = ["    S    ", BLANK, "    S    ", BLANK, "    S    "];
const FOUR: PipLayout = ["  S   S  ", BLANK, BLANK, BLANK, "  S   S  "];
const FIVE: PipLayout = ["  S   S  ", BLANK, "    S    ", BLANK, "  S   S  "];
const SIX: PipLayout = ["  S   S  ", BLANK, "  S   S  ", BLANK, "  S   S  "];
const SEVEN: PipLayout = ["  S   S  ", "    S    ", "  S   S  ", BLANK, "  S   S  "];
const EIGHT: PipLayout = ["  S   S  ", "    S    ", "  S   S  ", "    S    ", "  S   S  "];
const NINE: PipLayout = ["  S S S  ", BLANK, "  S S S  ", BLANK, "  S S S  "];
const ORNATE: PipLayout = ["   S S   ", "    S    ", " S S S S ", "    S    ", "   S S   "];

fn layout(card: &Card) -> &'static PipLayout {
    match card.rank() {
        Rank::Two => &TWO,
        Rank::Three => &THREE,
        Rank::Four => &FOUR,
        Rank::Five => &FIVE,
        Rank::Six => &SIX,
        Rank::Seven => &SEVEN,
        Rank::Eight => &EIGHT,
        Rank::Nine => &NINE,
        Rank::Ace => &SINGLE,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &ORNATE,
    }
}

/// Render one card as `CARD_HEIGHT` lines of exactly `CARD_WIDTH` characters.
///
/// ```
/// use rust_war::cards::{render, Card, Rank, Suit};
///
/// let lines = render(&Card::new(Rank::Two, Suit::Hearts));
/// assert_eq!(lines[1], "|2        |");
/// assert_eq!(lines[2], "|    ♥    |");
/// ```
#[must_use]
pub fn render(card: &Card) -> Vec<String> {
    let label = card.rank().label();
    let symbol = card.suit().symbol().to_string();

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(BORDER.to_string());
    lines.push(format!("|{:<9}|", label));
    lines.extend(
        layout(card)
            .iter()
            .map(|row| format!("|{}|", row.replace('S', &symbol))),
    );
    lines.push(format!("|{:>9}|", label));
    lines.push(BORDER.to_string());
    lines
}

/// Render two cards side by side, each indented by half a card width.
#[must_use]
pub fn render_pair(left: &Card, right: &Card) -> Vec<String> {
    let offset = " ".repeat(CARD_WIDTH / 2);
    render(left)
        .into_iter()
        .zip(render(right))
        .map(|(a, b)| format!("{offset}{a}    {offset}{b}"))
        .collect()
}

/// One-line label such as "10♦" or "Q♠".
#[must_use]
pub fn short_label(card: &Card) -> String {
    format!("{}{}", card.rank().label(), card.suit().symbol())
}
