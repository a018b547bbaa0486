//! Stand-in controller for `simulate_step`.

use crate::core::{Action, GameState, PlayerId};

use super::Strategy;

/// Answers discard and noble prompts with the defaults during simulation.
///
/// The action always comes from the caller of `simulate_step`, so asking
/// this strategy for one is a contract violation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimStrategy;

impl Strategy for SimStrategy {
    fn choose_action(&mut self, _state: &GameState, player: PlayerId) -> Option<Action> {
        panic!("SimStrategy::choose_action called for {player}: simulate_step takes its action from the caller");
    }
}
