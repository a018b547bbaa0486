//! Game configuration.
//!
//! Built once per session, validated, then shared read-only by every game
//! state (and every simulated copy) through an `Arc`.

use serde::{Deserialize, Serialize};

use super::card::{Card, Noble};
use super::error::GameError;

/// Rules constants plus the card and noble pool for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score that ends the game once reached.
    pub win_score: u32,

    /// Face-up cards per tier.
    pub table_cards_per_tier: usize,

    /// Maximum reserved cards per player.
    pub reserve_limit: usize,

    /// Maximum tokens a player may hold at the end of a turn.
    pub token_limit: u32,

    /// Safety cap on the number of turns in `Game::run`.
    pub turn_limit: u32,

    /// Bank supply a color needs before two of it may be taken at once.
    pub minimum_tokens_to_buy_2: u32,

    /// Maximum distinct colors in a single take.
    pub max_token_take: usize,

    /// Every card available to the session, all tiers mixed.
    pub cards: Vec<Card>,

    /// Every noble available to the session.
    pub nobles: Vec<Noble>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_score: 15,
            table_cards_per_tier: 4,
            reserve_limit: 3,
            token_limit: 10,
            turn_limit: 1000,
            minimum_tokens_to_buy_2: 4,
            max_token_take: 3,
            cards: Vec::new(),
            nobles: Vec::new(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    #[must_use]
    pub fn with_table_cards_per_tier(mut self, count: usize) -> Self {
        self.table_cards_per_tier = count;
        self
    }

    #[must_use]
    pub fn with_reserve_limit(mut self, limit: usize) -> Self {
        self.reserve_limit = limit;
        self
    }

    #[must_use]
    pub fn with_token_limit(mut self, limit: u32) -> Self {
        self.token_limit = limit;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub fn with_nobles(mut self, nobles: Vec<Noble>) -> Self {
        self.nobles = nobles;
        self
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.win_score == 0 {
            return Err(GameError::InvalidConfig("win_score must be positive"));
        }
        if self.max_token_take == 0 {
            return Err(GameError::InvalidConfig("max_token_take must be positive"));
        }
        if self.table_cards_per_tier == 0 {
            return Err(GameError::InvalidConfig("table_cards_per_tier must be positive"));
        }
        if self.turn_limit == 0 {
            return Err(GameError::InvalidConfig("turn_limit must be positive"));
        }
        Ok(())
    }
}
