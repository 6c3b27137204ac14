//! Property tests for deck construction, shuffling, and the deal.

use proptest::prelude::*;
use rust_war::cards::{Card, Deck, DECK_SIZE, HALF_DECK};
use rust_war::core::{shuffle, GameRng};
use rust_war::error::DeckError;

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.suit(), c.rank()));
    cards
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(sorted(deck.cards().to_vec()), sorted(Deck::standard().cards().to_vec()));
    }

    #[test]
    fn split_halves_cover_the_deck(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));
        let order = deck.cards().to_vec();

        let (first, second) = deck.split();
        prop_assert_eq!(first.len(), HALF_DECK);
        prop_assert_eq!(second.len(), HALF_DECK);

        let dealt: Vec<Card> = first.iter().chain(second.iter()).copied().collect();
        prop_assert_eq!(dealt, order);
    }

    #[test]
    fn generic_shuffle_keeps_elements(
        items in prop::collection::vec(any::<u16>(), 0..64),
        seed in any::<u64>(),
    ) {
        let mut shuffled = items.clone();
        shuffle(&mut shuffled, &mut GameRng::new(seed));

        let mut expected = items;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn short_decks_are_rejected(len in 0usize..DECK_SIZE) {
        let cards = Deck::standard().cards()[..len].to_vec();
        prop_assert_eq!(
            Deck::from_cards(cards),
            Err(DeckError::WrongSize { expected: DECK_SIZE, actual: len })
        );
    }
}

#[test]
fn test_shuffle_positions_are_uniform() {
    const TRIALS: usize = 52_000;
    let top = Deck::standard().cards()[0];
    let mut landed = [0usize; DECK_SIZE];

    let mut rng = GameRng::new(31337);
    for _ in 0..TRIALS {
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        let position = deck.cards().iter().position(|&c| c == top).unwrap();
        landed[position] += 1;
    }

    let expected = TRIALS / DECK_SIZE;
    for (position, &count) in landed.iter().enumerate() {
        let deviation = (count as f64 - expected as f64).abs() / expected as f64;
        assert!(deviation < 0.2, "position {position}: {count} vs {expected}");
    }
}

#[test]
fn test_shuffle_depends_on_seed() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle(&mut GameRng::new(1));
    b.shuffle(&mut GameRng::new(2));
    assert_ne!(a, b);

    let mut c = Deck::standard();
    c.shuffle(&mut GameRng::new(1));
    assert_eq!(a, c);
}
