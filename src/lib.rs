//! # gemtrade
//!
//! A Splendor-like gem trading game engine for bots and tree search.
//!
//! ## Design Principles
//!
//! 1. **Untrusted Moves**: Illegal moves are absorbed as
//!    `ActionOutcome::Rejected` and leave the state untouched. Only caller
//!    bugs surface as `GameError`.
//!
//! 2. **N-Player First**: Every API takes `player_count` as context. The
//!    starting bank scales with it.
//!
//! 3. **Strategies Outside the State**: Seats are driven through the
//!    `Strategy` trait. `GameState` holds no strategies, so it is plain
//!    data: `Clone`, `Send`, `Sync`, serializable.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: decks and the event log use `im`
//!   vectors, so `simulate_step` copies are cheap.
//!
//! - **Deterministic Randomness**: setup and the stock pools draw from a
//!   seeded ChaCha8 `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Colors, cards, players, state, actions, RNG, configuration
//! - `rules`: Economy, nobles, action engine, legal actions
//! - `strategy`: The `Strategy` trait and its stock implementations
//! - `game`: Setup, the turn loop, and `simulate_step`
//! - `pool`: Stock card and noble pools
//! - `observation`: Count-vector views for learning and search

pub mod core;
pub mod game;
pub mod observation;
pub mod pool;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord, Card, Color, GameConfig, GameError, GameEvent, GameRng,
    GameRngState, GameState, Gems, Noble, PlayerId, PlayerMap, PlayerState, Tier,
};

pub use crate::game::{new_game, new_state, simulate_step, EndReason, Game, GameOutcome};

pub use crate::rules::{
    apply_action, best_player, can_afford, check_nobles_for_player, check_winner,
    enforce_token_limit, legal_actions, pay_for_card, refill_table,
};

pub use crate::observation::{observe, Observation};

pub use crate::strategy::{random_seats, GreedyBot, RandomBot, SimStrategy, Strategy};
