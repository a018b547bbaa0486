//! Game rules.
//!
//! - `economy`: pricing, payment and the token limit
//! - `nobles`: noble qualification and awards
//! - `engine`: action validation and application, table refill, winners
//! - `legal`: enumeration of currently legal actions
//!
//! Everything here is a plain function over `GameState`. Strategies are
//! consulted only through the `Strategy` hooks passed in.

pub mod economy;
pub mod engine;
pub mod legal;
pub mod nobles;

pub use economy::{auto_discard, can_afford, enforce_token_limit, pay_for_card};
pub use engine::{apply_action, best_player, check_winner, refill_table};
pub(crate) use engine::can_take_double;
pub use legal::legal_actions;
pub use nobles::check_nobles_for_player;
