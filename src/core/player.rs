//! Player identification, per-seat storage, and the player ledger.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## PlayerState
//!
//! Everything one seat owns: tokens, permanent discounts, purchased and
//! reserved cards, nobles. Scores are cached and recomputed on every
//! mutation that can change them, so `score()` is always
//! `card_score + noble_score`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::{Card, Noble};
use super::color::Gems;

/// Seat identifier. Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use gemtrade::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gemtrade::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// assert_eq!(wins[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// # Panics
    ///
    /// If `player_count` is 0 or above 255.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

/// One seat's holdings.
///
/// `tokens` and `discounts` are open for the economy rules to adjust.
/// Cards and nobles go through methods so the cached scores stay in sync.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Tokens held, gold included.
    pub tokens: Gems,
    /// Permanent per-color discounts from purchased cards. Gold stays 0.
    pub discounts: Gems,
    cards: Vec<Card>,
    reserved: Vec<Card>,
    nobles: Vec<Noble>,
    card_score: u32,
    noble_score: u32,
}

impl PlayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total tokens held across all colors.
    #[must_use]
    pub fn total_tokens(&self) -> u32 {
        self.tokens.total()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.card_score + self.noble_score
    }

    #[must_use]
    pub fn card_score(&self) -> u32 {
        self.card_score
    }

    #[must_use]
    pub fn noble_score(&self) -> u32 {
        self.noble_score
    }

    /// Purchased cards, in purchase order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn reserved(&self) -> &[Card] {
        &self.reserved
    }

    #[must_use]
    pub fn nobles(&self) -> &[Noble] {
        &self.nobles
    }

    /// Take ownership of a purchased card: tableau, discount and score.
    pub fn gain_card(&mut self, card: Card) {
        self.discounts[card.color()] += 1;
        self.cards.push(card);
        self.card_score = self.cards.iter().map(Card::points).sum();
    }

    pub fn add_noble(&mut self, noble: Noble) {
        self.nobles.push(noble);
        self.noble_score = self.nobles.iter().map(Noble::points).sum();
    }

    /// Put a card on hold for a later purchase.
    pub fn reserve(&mut self, card: Card) {
        self.reserved.push(card);
    }

    /// Remove a reserved card by position.
    pub fn take_reserved(&mut self, index: usize) -> Option<Card> {
        (index < self.reserved.len()).then(|| self.reserved.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Tier};

    fn card(points: u32, color: Color) -> Card {
        Card::new(Tier::ONE, points, color, Gems::new())
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_gain_card_updates_discount_and_score() {
        let mut player = PlayerState::new();
        player.gain_card(card(1, Color::Red));
        player.gain_card(card(2, Color::Red));

        assert_eq!(player.discounts[Color::Red], 2);
        assert_eq!(player.card_score(), 3);
        assert_eq!(player.score(), 3);
        assert_eq!(player.cards().len(), 2);
    }

    #[test]
    fn test_score_is_card_plus_noble() {
        let mut player = PlayerState::new();
        player.gain_card(card(2, Color::Blue));
        player.add_noble(Noble::new("Noble 1", 3, Gems::new()));

        assert_eq!(player.noble_score(), 3);
        assert_eq!(player.score(), player.card_score() + player.noble_score());
    }

    #[test]
    fn test_take_reserved() {
        let mut player = PlayerState::new();
        player.reserve(card(0, Color::White));
        player.reserve(card(1, Color::Black));

        assert_eq!(player.take_reserved(5), None);
        let taken = player.take_reserved(0).unwrap();
        assert_eq!(taken.color(), Color::White);
        assert_eq!(player.reserved().len(), 1);
    }
}
