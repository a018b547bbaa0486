//! Domain model: colors, cards, players, configuration, actions, state.
//!
//! Everything here is data. The rules that change it live in
//! `crate::rules`.

pub mod action;
pub mod card;
pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionOutcome, ActionRecord, GameEvent};
pub use card::{Card, Noble, Tier, TIER_COUNT};
pub use color::{Color, Gems, COLOR_COUNT};
pub use config::GameConfig;
pub use error::GameError;
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::{default_starting_bank, GameState, STARTING_GOLD};
