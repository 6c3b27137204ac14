//! The War turn engine.
//!
//! `WarGame` owns both hands and the pool and advances one state-machine
//! transition per `step()`. A round is one or more reveals; each tie adds a
//! war escalation of two cards per side (a face-down stake, then a new
//! reveal). Draws within an escalation are interleaved in seat order and the
//! first draw that fails ends the round against that player.

use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::cards::{Card, Deck};
use crate::core::{GameRng, Player, PlayerId, PlayerMap, RandomSource};
use crate::error::Result;
use crate::rules::{GameResult, Phase, Play, PlayKind, Resolution, RoundEvent, RoundOutcome};
use crate::zones::{Hand, Pool};

/// Bookkeeping for the round in progress.
#[derive(Clone, Debug, Default)]
struct RoundState {
    number: u32,
    plays: SmallVec<[Play; 6]>,
    wars: u32,
    /// The pair waiting to be compared.
    pending: Option<PlayerMap<Card>>,
    /// Set once the round has a winner, cleared when the pool is awarded.
    decision: Option<(PlayerId, Resolution)>,
}

/// A single game of War between two players.
///
/// Generic over the random source so tests can script pool shuffles.
#[derive(Clone, Debug)]
pub struct WarGame<R: RandomSource = GameRng> {
    players: PlayerMap<Player>,
    pool: Pool,
    rng: R,
    phase: Phase,
    round: RoundState,
    /// Cards dealt at the start; conserved across hands and pool.
    card_total: usize,
    rounds_played: u32,
    wars_fought: u32,
    deepest_war: u32,
}

/// Builder for creating a WarGame.
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    names: PlayerMap<String>,
}

impl Default for WarGameBuilder {
    fn default() -> Self {
        Self {
            names: PlayerMap::new(|p| p.to_string()),
        }
    }
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names[player] = name.into();
        self
    }

    /// Shuffle a fresh standard deck with a seeded RNG and deal it.
    pub fn build(self, seed: u64) -> WarGame<GameRng> {
        info!(seed, "dealing new game");
        self.deal(GameRng::new(seed))
    }

    /// Shuffle a fresh standard deck with `rng` and deal it.
    ///
    /// The same source later shuffles every awarded pool.
    pub fn deal<R: RandomSource>(self, mut rng: R) -> WarGame<R> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        self.deal_deck(deck, rng)
    }

    /// Split an already-ordered deck: the first half goes to player one.
    pub fn deal_deck<R: RandomSource>(self, deck: Deck, rng: R) -> WarGame<R> {
        let (first, second) = deck.split();
        self.deal_hands(first, second, rng)
    }

    /// Validate `cards` as a deck and deal it in the given order.
    ///
    /// Fails with `WarError::Deck` unless `cards` is exactly 52 unique cards.
    pub fn deal_cards<R: RandomSource>(self, cards: Vec<Card>, rng: R) -> Result<WarGame<R>> {
        let deck = Deck::from_cards(cards)?;
        Ok(self.deal_deck(deck, rng))
    }

    /// Start from explicit hands.
    ///
    /// The game is over immediately if one hand is empty.
    ///
    /// # Panics
    ///
    /// Panics if both hands are empty.
    pub fn deal_hands<R: RandomSource>(self, first: Hand, second: Hand, rng: R) -> WarGame<R> {
        let card_total = first.len() + second.len();
        assert!(card_total > 0, "at least one hand must hold cards");

        let (first_name, second_name) = self.names.into_pair();
        let players = PlayerMap::from_pair(
            Player::new(first_name, first),
            Player::new(second_name, second),
        );
        let phase = if players.iter().any(|(_, p)| p.is_out()) {
            Phase::GameOver
        } else {
            Phase::Idle
        };

        WarGame {
            players,
            pool: Pool::new(),
            rng,
            phase,
            round: RoundState::default(),
            card_total,
            rounds_played: 0,
            wars_fought: 0,
            deepest_war: 0,
        }
    }
}

impl<R: RandomSource> WarGame<R> {
    /// Advance one transition of the state machine.
    ///
    /// Returns `None` once the game is over.
    pub fn step(&mut self) -> Option<RoundEvent> {
        let event = match self.phase {
            Phase::GameOver => return None,
            Phase::Idle => self.start_round(),
            Phase::RoundStart => self.draw_reveals(false),
            Phase::Reveal => self.compare(),
            Phase::War => self.draw_reveals(true),
            Phase::RoundResolve => self.resolve(),
        };

        debug_assert_eq!(
            self.cards_in_play(),
            self.card_total,
            "cards were created or lost during {:?}",
            self.phase
        );
        Some(event)
    }

    /// Step until the current round resolves.
    ///
    /// # Panics
    ///
    /// Panics if the game is already over.
    pub fn play_round(&mut self) -> RoundOutcome {
        assert!(!self.is_over(), "cannot play a round after the game is over");
        loop {
            match self.step() {
                Some(RoundEvent::Resolved(outcome)) => return outcome,
                Some(_) => {}
                None => unreachable!("a round always resolves before the game ends"),
            }
        }
    }

    /// Play rounds until one player holds every card.
    pub fn run_to_completion(&mut self) -> GameResult {
        while !self.is_over() {
            self.play_round();
        }
        self.result().expect("a finished game has a result")
    }

    // === State machine ===

    fn start_round(&mut self) -> RoundEvent {
        let round = self.rounds_played + 1;
        self.round = RoundState {
            number: round,
            ..RoundState::default()
        };
        self.phase = Phase::RoundStart;
        trace!(round, "round started");
        RoundEvent::Started { round }
    }

    /// Draw the next comparison pair, preceded by one stake each during a war.
    fn draw_reveals(&mut self, with_stakes: bool) -> RoundEvent {
        if with_stakes {
            for player in PlayerId::all() {
                if self.play_card(player, PlayKind::Stake).is_none() {
                    return self.declare_out(player);
                }
            }
        }

        let Some(first) = self.play_card(PlayerId::ONE, PlayKind::Reveal) else {
            return self.declare_out(PlayerId::ONE);
        };
        let Some(second) = self.play_card(PlayerId::TWO, PlayKind::Reveal) else {
            return self.declare_out(PlayerId::TWO);
        };

        let cards = PlayerMap::from_pair(first, second);
        self.round.pending = Some(cards);
        self.phase = Phase::Reveal;
        RoundEvent::Revealed { cards }
    }

    fn compare(&mut self) -> RoundEvent {
        let cards = self
            .round
            .pending
            .take()
            .expect("reveal phase always has a pending pair");
        let (first, second) = (cards[PlayerId::ONE], cards[PlayerId::TWO]);

        let (winner, winning, losing) = match first.cmp_value(&second) {
            Ordering::Greater => (PlayerId::ONE, first, second),
            Ordering::Less => (PlayerId::TWO, second, first),
            Ordering::Equal => {
                self.round.wars += 1;
                self.phase = Phase::War;
                debug!(
                    round = self.round.number,
                    depth = self.round.wars,
                    value = first.value(),
                    "war"
                );
                return RoundEvent::War { depth: self.round.wars };
            }
        };

        self.round.decision = Some((winner, Resolution::HigherCard { winning, losing }));
        self.phase = Phase::RoundResolve;
        self.resolve()
    }

    fn declare_out(&mut self, loser: PlayerId) -> RoundEvent {
        debug!(round = self.round.number, player = %loser, "ran out of cards");
        self.round.pending = None;
        self.round.decision = Some((loser.opponent(), Resolution::OutOfCards { loser }));
        self.phase = Phase::RoundResolve;
        RoundEvent::RanOut { player: loser }
    }

    /// Shuffle the pool onto the back of the winner's hand and close the round.
    fn resolve(&mut self) -> RoundEvent {
        let (winner, resolution) = self
            .round
            .decision
            .take()
            .expect("resolve phase always has a decision");

        let pool_size = self.pool.len();
        self.players[winner].hand.append(self.pool.award(&mut self.rng));

        self.rounds_played += 1;
        self.wars_fought += self.round.wars;
        self.deepest_war = self.deepest_war.max(self.round.wars);

        let outcome = RoundOutcome {
            round: self.round.number,
            plays: std::mem::take(&mut self.round.plays),
            wars: self.round.wars,
            winner,
            resolution,
            hand_sizes: self.hand_sizes(),
        };
        debug!(
            round = outcome.round,
            winner = %winner,
            pool = pool_size,
            wars = outcome.wars,
            "round resolved"
        );

        self.phase = if self.players.iter().any(|(_, p)| p.is_out()) {
            info!(
                winner = self.players[winner].name(),
                cards = self.players[winner].card_count(),
                rounds = self.rounds_played,
                wars = self.wars_fought,
                "game over"
            );
            Phase::GameOver
        } else {
            Phase::Idle
        };

        RoundEvent::Resolved(outcome)
    }

    fn play_card(&mut self, player: PlayerId, kind: PlayKind) -> Option<Card> {
        let card = self.players[player].hand.draw()?;
        trace!(%player, %card, ?kind, "card played");
        self.pool.push(card);
        self.round.plays.push(Play { player, card, kind });
        Some(card)
    }

    fn cards_in_play(&self) -> usize {
        self.players.iter().map(|(_, p)| p.card_count()).sum::<usize>() + self.pool.len()
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Display names in seat order.
    #[must_use]
    pub fn names(&self) -> PlayerMap<String> {
        self.players.map(|_, p| p.name().to_string())
    }

    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.players.map(|_, p| p.card_count())
    }

    /// Cards currently contested.
    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Cards dealt at the start of the game.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.card_total
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn wars_fought(&self) -> u32 {
        self.wars_fought
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let (winner, player) = self.players.iter().find(|(_, p)| !p.is_out())?;
        Some(GameResult {
            winner,
            winner_name: player.name().to_string(),
            hand_size: player.card_count(),
            rounds: self.rounds_played,
            wars: self.wars_fought,
            deepest_war: self.deepest_war,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::error::{DeckError, WarError};

    /// Leaves every pool in play order.
    struct NoShuffle;

    impl RandomSource for NoShuffle {
        fn index_inclusive(&mut self, max: usize) -> usize {
            max
        }
    }

    fn hand(ranks: &[Rank], suit: Suit) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(r, suit)))
    }

    fn game(first: &[Rank], second: &[Rank]) -> WarGame<NoShuffle> {
        WarGameBuilder::new()
            .player_name(PlayerId::ONE, "Ada")
            .player_name(PlayerId::TWO, "Grace")
            .deal_hands(hand(first, Suit::Hearts), hand(second, Suit::Spades), NoShuffle)
    }

    #[test]
    fn test_game_creation() {
        let game = WarGameBuilder::new().build(42);

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.hand_sizes(), PlayerMap::from_pair(26, 26));
        assert_eq!(game.card_total(), 52);
        assert!(game.pool().is_empty());
        assert_eq!(game.player(PlayerId::ONE).name(), "Player 1");
        assert!(game.result().is_none());
    }

    #[test]
    fn test_simple_round_transitions() {
        let mut game = game(&[Rank::Ace, Rank::Two], &[Rank::Two, Rank::Three]);

        assert_eq!(game.step(), Some(RoundEvent::Started { round: 1 }));
        assert_eq!(game.phase(), Phase::RoundStart);

        let revealed = game.step();
        assert_eq!(
            revealed,
            Some(RoundEvent::Revealed {
                cards: PlayerMap::from_pair(
                    Card::new(Rank::Ace, Suit::Hearts),
                    Card::new(Rank::Two, Suit::Spades)
                )
            })
        );
        assert_eq!(game.phase(), Phase::Reveal);
        assert_eq!(game.pool().len(), 2);

        match game.step() {
            Some(RoundEvent::Resolved(outcome)) => {
                assert_eq!(outcome.winner, PlayerId::ONE);
                assert_eq!(outcome.pool_size(), 2);
                assert_eq!(outcome.hand_sizes, PlayerMap::from_pair(3, 1));
            }
            other => panic!("expected resolution, got {:?}", other),
        }
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.pool().is_empty());
    }

    #[test]
    fn test_war_transitions() {
        let mut game = game(
            &[Rank::Seven, Rank::Two, Rank::Nine],
            &[Rank::Seven, Rank::Four, Rank::Three],
        );

        game.step(); // started
        game.step(); // revealed 7 / 7
        assert_eq!(game.step(), Some(RoundEvent::War { depth: 1 }));
        assert_eq!(game.phase(), Phase::War);

        match game.step() {
            Some(RoundEvent::Revealed { cards }) => {
                assert_eq!(cards[PlayerId::ONE].value(), 9);
                assert_eq!(cards[PlayerId::TWO].value(), 3);
            }
            other => panic!("expected reveal, got {:?}", other),
        }
        assert_eq!(game.pool().len(), 6);

        match game.step() {
            Some(RoundEvent::Resolved(outcome)) => {
                assert_eq!(outcome.winner, PlayerId::ONE);
                assert_eq!(outcome.wars, 1);
                let kinds: Vec<_> = outcome.plays.iter().map(|p| p.kind).collect();
                assert_eq!(
                    kinds,
                    vec![
                        PlayKind::Reveal,
                        PlayKind::Reveal,
                        PlayKind::Stake,
                        PlayKind::Stake,
                        PlayKind::Reveal,
                        PlayKind::Reveal
                    ]
                );
            }
            other => panic!("expected resolution, got {:?}", other),
        }
        assert!(game.is_over());
        assert_eq!(game.step(), None);
    }

    #[test]
    fn test_ran_out_event_then_resolution() {
        let mut game = game(&[Rank::Seven, Rank::Five], &[Rank::Seven]);

        game.step();
        game.step();
        game.step(); // war
        assert_eq!(game.step(), Some(RoundEvent::RanOut { player: PlayerId::TWO }));
        assert_eq!(game.phase(), Phase::RoundResolve);

        let outcome = match game.step() {
            Some(RoundEvent::Resolved(outcome)) => outcome,
            other => panic!("expected resolution, got {:?}", other),
        };
        assert_eq!(outcome.winner, PlayerId::ONE);
        assert_eq!(outcome.ran_out(), Some(PlayerId::TWO));
        assert_eq!(outcome.pool_size(), 3);
    }

    #[test]
    fn test_awarded_pool_goes_to_back() {
        let mut game = game(&[Rank::King, Rank::Five], &[Rank::Queen, Rank::Six]);
        game.play_round();

        let cards: Vec<_> = game.player(PlayerId::ONE).hand.iter().map(|c| c.rank()).collect();
        assert_eq!(cards, vec![Rank::Five, Rank::King, Rank::Queen]);
    }

    #[test]
    fn test_deal_cards_keeps_order() {
        let mut cards = Deck::standard().cards().to_vec();
        cards.reverse();
        let game = WarGameBuilder::new()
            .deal_cards(cards.clone(), NoShuffle)
            .unwrap();

        assert!(game.player(PlayerId::ONE).hand.iter().eq(cards[..26].iter()));
        assert!(game.player(PlayerId::TWO).hand.iter().eq(cards[26..].iter()));
    }

    #[test]
    fn test_deal_cards_rejects_bad_deck() {
        let mut cards = Deck::standard().cards().to_vec();
        cards.truncate(51);
        let short = WarGameBuilder::new().deal_cards(cards.clone(), NoShuffle);
        assert!(matches!(
            short,
            Err(WarError::Deck(DeckError::WrongSize { expected: 52, actual: 51 }))
        ));

        cards.push(cards[0]);
        let duplicate = WarGameBuilder::new().deal_cards(cards.clone(), NoShuffle);
        assert!(matches!(
            duplicate,
            Err(WarError::Deck(DeckError::DuplicateCard(card))) if card == cards[0]
        ));
    }

    #[test]
    fn test_empty_hand_at_deal_is_game_over() {
        let game = game(&[], &[Rank::Two]);
        assert!(game.is_over());

        let result = game.result().unwrap();
        assert_eq!(result.winner, PlayerId::TWO);
        assert_eq!(result.winner_name, "Grace");
        assert_eq!(result.hand_size, 1);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    #[should_panic(expected = "at least one hand must hold cards")]
    fn test_two_empty_hands_panics() {
        game(&[], &[]);
    }

    #[test]
    #[should_panic(expected = "cannot play a round after the game is over")]
    fn test_play_after_game_over_panics() {
        let mut game = game(&[Rank::Ace], &[Rank::Two]);
        game.play_round();
        game.play_round();
    }

    #[test]
    fn test_run_to_completion() {
        let mut game = WarGameBuilder::new().build(7);
        let result = game.run_to_completion();

        assert_eq!(result.hand_size, 52);
        assert_eq!(result.rounds, game.rounds_played());
        assert_eq!(game.player(result.winner.opponent()).card_count(), 0);
        assert!(result.deepest_war <= result.wars);
    }

    #[test]
    fn test_deterministic_replay() {
        let mut game1 = WarGameBuilder::new().build(12345);
        let mut game2 = WarGameBuilder::new().build(12345);

        assert_eq!(game1.run_to_completion(), game2.run_to_completion());
    }
}
