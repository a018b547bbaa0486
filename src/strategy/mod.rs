//! Player controllers.
//!
//! The engine talks to whoever sits in a seat through `Strategy` and
//! nothing else. Bots, interactive front-ends and search wrappers are all
//! separate implementations of the same three hooks:
//!
//! - `choose_action`: the move for this turn, or `None` to concede
//! - `choose_discard`: which tokens to return when over the token limit
//! - `choose_noble`: which noble to take when several qualify
//!
//! Answers are untrusted. The rules clamp discard plans to what the player
//! holds and ignore noble choices that are not on offer.

pub mod greedy;
pub mod random;
pub mod sim;

pub use greedy::GreedyBot;
pub use random::RandomBot;
pub use sim::SimStrategy;

use crate::core::{Action, Gems, GameRng, GameState, Noble, PlayerId};
use crate::rules::auto_discard;

/// `count` random bots, each on its own fork of one seeded stream.
///
/// Seat `i` gets the `i`-th fork, so adding seats leaves earlier seats'
/// play unchanged.
#[must_use]
pub fn random_seats(count: usize, seed: u64) -> Vec<Box<dyn Strategy>> {
    let mut root = GameRng::new(seed);
    (0..count)
        .map(|_| Box::new(RandomBot::from_rng(root.fork())) as Box<dyn Strategy>)
        .collect()
}

/// Controller for one seat.
pub trait Strategy: Send {
    /// Pick the move for `player`'s turn. `None` concedes and ends the game.
    fn choose_action(&mut self, state: &GameState, player: PlayerId) -> Option<Action>;

    /// Pick tokens to return to the bank; `excess` is how many over the limit.
    ///
    /// Default: discard from the most-held colors.
    fn choose_discard(&mut self, state: &GameState, player: PlayerId, excess: u32) -> Gems {
        auto_discard(&state.player(player).tokens, excess)
    }

    /// Pick one of several qualifying nobles. Only called with two or more
    /// candidates.
    ///
    /// Default: the first candidate.
    fn choose_noble(&mut self, _state: &GameState, _player: PlayerId, candidates: &[Noble]) -> Noble {
        candidates[0].clone()
    }
}
