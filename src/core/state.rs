//! Authoritative game state.
//!
//! `GameState` is plain data: the rules in `crate::rules` operate on it.
//! It owns everything that changes during a game. The configuration is
//! shared through an `Arc` since it never changes, and decks and the event
//! log use `im` persistent vectors, so `clone()` is cheap enough for
//! per-node copies in tree search.
//!
//! A clone never aliases mutable data with the original: `im` vectors are
//! copy-on-write and everything else is owned by value.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::action::GameEvent;
use super::card::{Card, Noble, Tier, TIER_COUNT};
use super::color::Gems;
use super::config::GameConfig;
use super::error::GameError;
use super::player::{PlayerId, PlayerMap, PlayerState};

/// Gold tokens in a fresh bank, independent of player count.
pub const STARTING_GOLD: u32 = 5;

/// Starting bank for `player_count` players.
///
/// Each base color gets `(n² − 3n + 10) / 2` tokens (4 for two players,
/// 5 for three, 7 for four), plus 5 gold.
#[must_use]
pub fn default_starting_bank(player_count: usize) -> Gems {
    let n = player_count as u32;
    let per_color = (n * n + 10 - 3 * n) / 2;
    Gems::uniform(per_color, STARTING_GOLD)
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: Arc<GameConfig>,

    /// Seats in turn order.
    pub players: PlayerMap<PlayerState>,

    /// Tokens not held by any player.
    pub bank: Gems,

    /// Face-down decks per tier (top = back).
    pub decks: [Vector<Card>; TIER_COUNT],

    /// Face-up cards per tier, at most `table_cards_per_tier` each.
    pub table: [Vec<Card>; TIER_COUNT],

    available_nobles: Vec<Noble>,

    /// Highest per-noble minimum requirement among available nobles.
    /// Players whose best discount is below this skip the noble check.
    noble_min_requirement: u32,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Set once a winner has been declared.
    pub finished: bool,

    /// Turn number (starts at 1, advances with the turn pointer).
    pub turn: u32,

    history: Vector<GameEvent>,
}

impl GameState {
    /// Create an empty table for `player_count` players: default starting
    /// bank, empty decks and rows, no nobles.
    ///
    /// # Panics
    ///
    /// If `player_count` is 0 or above 255.
    #[must_use]
    pub fn new(config: Arc<GameConfig>, player_count: usize) -> Self {
        Self {
            config,
            players: PlayerMap::with_default(player_count),
            bank: default_starting_bank(player_count),
            decks: Default::default(),
            table: Default::default(),
            available_nobles: Vec::new(),
            noble_min_requirement: 0,
            current_player: PlayerId::new(0),
            finished: false,
            turn: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// Pass the turn to the next seat.
    pub fn next_player(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
        self.turn += 1;
    }

    // === Cards ===

    #[must_use]
    pub fn table_row(&self, tier: Tier) -> &[Card] {
        &self.table[tier.index()]
    }

    #[must_use]
    pub fn deck(&self, tier: Tier) -> &Vector<Card> {
        &self.decks[tier.index()]
    }

    /// Replace a tier's deck. The last card is the top.
    pub fn set_deck(&mut self, tier: Tier, cards: Vec<Card>) {
        self.decks[tier.index()] = cards.into_iter().collect();
    }

    // === Nobles ===

    #[must_use]
    pub fn available_nobles(&self) -> &[Noble] {
        &self.available_nobles
    }

    #[must_use]
    pub fn noble_min_requirement(&self) -> u32 {
        self.noble_min_requirement
    }

    pub fn set_available_nobles(&mut self, nobles: Vec<Noble>) {
        self.available_nobles = nobles;
        self.refresh_noble_min_requirement();
    }

    /// Remove a noble from the available set.
    ///
    /// Returns false if it was not available.
    pub fn remove_noble(&mut self, noble: &Noble) -> bool {
        let Some(pos) = self.available_nobles.iter().position(|n| n == noble) else {
            return false;
        };
        self.available_nobles.remove(pos);
        self.refresh_noble_min_requirement();
        true
    }

    fn refresh_noble_min_requirement(&mut self) {
        self.noble_min_requirement = self
            .available_nobles
            .iter()
            .map(Noble::min_requirement)
            .max()
            .unwrap_or(0);
    }

    // === History ===

    /// Event log, oldest first.
    ///
    /// The log only grows. Clones share it structurally, so copying a state
    /// is cheap, but every copy keeps every earlier event alive.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    pub fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }

    /// Drop the event log. Rules never read it, so play is unaffected.
    ///
    /// Search code can call this on a root copy before expanding deep
    /// lines so each node only holds the events of its own line.
    pub fn clear_history(&mut self) {
        self.history = Vector::new();
    }

    // === Invariants ===

    /// Per-color token count across the bank and every player.
    ///
    /// Constant for the life of a game.
    #[must_use]
    pub fn token_totals(&self) -> Gems {
        let mut totals = self.bank;
        for player in self.players.values() {
            totals.add_all(&player.tokens);
        }
        totals
    }

    /// Per-tier card count across decks, table, and player holdings.
    ///
    /// Constant for the life of a game.
    #[must_use]
    pub fn card_totals(&self) -> [usize; TIER_COUNT] {
        let mut totals = [0; TIER_COUNT];
        for tier in Tier::ALL {
            totals[tier.index()] = self.deck(tier).len() + self.table_row(tier).len();
        }
        for player in self.players.values() {
            for card in player.cards().iter().chain(player.reserved()) {
                totals[card.tier().index()] += 1;
            }
        }
        totals
    }

    /// Highest discount count the given player holds in any base color.
    #[must_use]
    pub fn best_discount(&self, player: PlayerId) -> u32 {
        self.players[player].discounts.max_base()
    }

    // === Snapshots ===

    /// Encode the full state with `bincode`.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
