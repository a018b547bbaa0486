//! Noble awards.

use crate::core::{GameEvent, GameState, Noble, PlayerId};
use crate::strategy::Strategy;

/// Award `player` at most one qualifying noble.
///
/// Players whose best discount is below the state's cached
/// `noble_min_requirement` are skipped without scanning. One qualifying
/// noble is awarded directly; several are put to the strategy, and a pick
/// that is not on offer awards nothing.
///
/// Returns the awarded noble, if any.
pub fn check_nobles_for_player(
    state: &mut GameState,
    player: PlayerId,
    strategy: &mut dyn Strategy,
) -> Option<Noble> {
    if state.best_discount(player) < state.noble_min_requirement() {
        return None;
    }

    let discounts = state.player(player).discounts;
    let mut candidates: Vec<Noble> = state
        .available_nobles()
        .iter()
        .filter(|noble| noble.is_met_by(&discounts))
        .cloned()
        .collect();

    let chosen = match candidates.len() {
        0 => return None,
        1 => candidates.swap_remove(0),
        _ => strategy.choose_noble(state, player, &candidates),
    };

    if !state.remove_noble(&chosen) {
        return None;
    }

    let turn = state.turn;
    state.record(GameEvent::NobleAwarded {
        player,
        noble: chosen.name().to_string(),
        turn,
    });
    state.player_mut(player).add_noble(chosen.clone());
    Some(chosen)
}
