//! Contract-violation errors.
//!
//! Illegal moves are not errors: the rules reject them as no-ops. A
//! `GameError` means the caller misused the engine.

use thiserror::Error;

use super::card::Card;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("state has {seats} seats but {strategies} strategies were given")]
    SeatMismatch { seats: usize, strategies: usize },

    /// `pay_for_card` called without a passing affordability check.
    #[error("player cannot afford card {card}")]
    CannotAfford { card: Card },

    #[error("state snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
