//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. War is strictly two-player, so only
//! `PlayerId::ONE` and `PlayerId::TWO` exist.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A display name paired with the hand that player exclusively owns.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::zones::Hand;

/// Seat identifier.
///
/// Seat indices are 0-based internally; `Display` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat. Draws first and loses ties of exhaustion.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second seat.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both seats in play order.
    ///
    /// ```
    /// use rust_war::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::ONE, PlayerId::TWO]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use rust_war::core::{PlayerId, PlayerMap};
///
/// let mut sizes: PlayerMap<usize> = PlayerMap::with_value(26);
/// sizes[PlayerId::TWO] -= 1;
///
/// assert_eq!(sizes[PlayerId::ONE], 26);
/// assert_eq!(sizes[PlayerId::TWO], 25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map from explicit values in seat order.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Take both entries out in seat order.
    pub fn into_pair(self) -> (T, T) {
        let [first, second] = self.data;
        (first, second)
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Transform every entry, keeping seats.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(p, self.get(p)))
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A named player and the hand they own.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    /// The player's FIFO queue of cards.
    pub hand: Hand,
}

impl Player {
    /// Create a player holding the given hand.
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cards left in hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.opponent().opponent(), PlayerId::ONE);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::ONE] = 10;
        *map.get_mut(PlayerId::TWO) += 20;

        assert_eq!(map, PlayerMap::from_pair(10, 20));
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map = PlayerMap::from_pair("a", "bb");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &"a"), (PlayerId::TWO, &"bb")]);

        let lengths = map.map(|_, s| s.len());
        assert_eq!(lengths, PlayerMap::from_pair(1, 2));
        assert_eq!(map.into_pair(), ("a", "bb"));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::from_pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_player_out_of_cards() {
        let player = Player::new("Ada", Hand::new());
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.card_count(), 0);
        assert!(player.is_out());
    }
}
