//! Action engine: validate and apply moves, refill the table, pick winners.
//!
//! Illegal moves are rejected without side effects and report
//! `ActionOutcome::Rejected`; the turn is spent either way. `Err` is
//! reserved for contract violations.

use smallvec::SmallVec;
use std::cmp::Reverse;

use crate::core::{
    Action, ActionOutcome, ActionRecord, Color, GameError, GameEvent, GameState, PlayerId,
    PlayerState, Tier,
};
use crate::strategy::Strategy;

use super::economy::{can_afford, enforce_token_limit, pay_for_card};

/// Apply `action` for the current player.
///
/// `strategy` answers the discard prompt if the move takes the player over
/// the token limit.
pub fn apply_action(
    state: &mut GameState,
    action: &Action,
    strategy: &mut dyn Strategy,
) -> Result<ActionOutcome, GameError> {
    let player = state.current_player;
    let outcome = match action {
        Action::TakeDifferent { colors } => take_different(state, player, action, colors, strategy),
        Action::TakeDouble { color } => take_double(state, player, action, *color, strategy),
        Action::BuyCard { tier, index } => buy_card(state, player, action, *tier, *index)?,
        Action::BuyCardReserved { index } => buy_reserved(state, player, action, *index)?,
        Action::ReserveCard {
            tier,
            index,
            from_deck,
        } => reserve_card(state, player, action, *tier, *index, *from_deck, strategy),
    };
    Ok(outcome)
}

/// Top every table row back up to `table_cards_per_tier` from its deck.
pub fn refill_table(state: &mut GameState) {
    let per_tier = state.config().table_cards_per_tier;
    for tier in Tier::ALL {
        let t = tier.index();
        while state.table[t].len() < per_tier {
            let Some(card) = state.decks[t].pop_back() else {
                break;
            };
            state.table[t].push(card);
        }
    }
}

/// Declare a winner if anyone has reached `win_score`.
///
/// Highest score wins; ties go to the player with fewer cards, then to the
/// lowest seat. Sets `finished` when a winner is found.
pub fn check_winner(state: &mut GameState) -> Option<PlayerId> {
    let win_score = state.config().win_score;
    let winner = rank_players(state, |p| p.score() >= win_score)?;

    state.finished = true;
    let turn = state.turn;
    state.record(GameEvent::Won {
        player: winner,
        turn,
    });
    Some(winner)
}

/// Leading player by the winner ordering, whether or not anyone has
/// reached `win_score`.
#[must_use]
pub fn best_player(state: &GameState) -> PlayerId {
    rank_players(state, |_| true).unwrap_or(PlayerId::new(0))
}

/// First player, in seat order, maximizing `(score, -card_count)` among
/// those passing `eligible`.
fn rank_players(state: &GameState, eligible: impl Fn(&PlayerState) -> bool) -> Option<PlayerId> {
    state
        .players
        .iter()
        .filter(|(_, p)| eligible(*p))
        .min_by_key(|(_, p)| (Reverse(p.score()), p.cards().len()))
        .map(|(id, _)| id)
}

/// Bank supply a color needs before a double take of it.
fn double_threshold(state: &GameState) -> u32 {
    state.config().minimum_tokens_to_buy_2.max(2)
}

/// True if a `TakeDouble` of `color` would go through right now.
pub(crate) fn can_take_double(state: &GameState, color: Color) -> bool {
    color.is_base() && state.bank[color] >= double_threshold(state)
}

fn commit(state: &mut GameState, player: PlayerId, action: &Action) {
    let turn = state.turn;
    state.record(GameEvent::Action(ActionRecord::new(player, action.clone(), turn)));
}

fn take_different(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    colors: &[Color],
    strategy: &mut dyn Strategy,
) -> ActionOutcome {
    let mut picked: SmallVec<[Color; 5]> = SmallVec::new();
    for &color in colors {
        if color.is_base() && state.bank[color] > 0 && !picked.contains(&color) {
            picked.push(color);
        }
    }
    if picked.is_empty() || picked.len() > state.config().max_token_take {
        return ActionOutcome::Rejected;
    }

    for color in picked {
        state.bank[color] -= 1;
        state.player_mut(player).tokens[color] += 1;
    }
    commit(state, player, action);
    enforce_token_limit(state, player, strategy);
    ActionOutcome::Applied
}

fn take_double(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    color: Color,
    strategy: &mut dyn Strategy,
) -> ActionOutcome {
    if !can_take_double(state, color) {
        return ActionOutcome::Rejected;
    }

    state.bank[color] -= 2;
    state.player_mut(player).tokens[color] += 2;
    commit(state, player, action);
    enforce_token_limit(state, player, strategy);
    ActionOutcome::Applied
}

fn buy_card(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    tier: Tier,
    index: usize,
) -> Result<ActionOutcome, GameError> {
    let Some(card) = state.table_row(tier).get(index).cloned() else {
        return Ok(ActionOutcome::Rejected);
    };
    if !can_afford(state.player(player), &card) {
        return Ok(ActionOutcome::Rejected);
    }

    let payment = pay_for_card(state.player_mut(player), card)?;
    state.table[tier.index()].remove(index);
    state.bank.add_all(&payment);
    commit(state, player, action);
    refill_table(state);
    Ok(ActionOutcome::Applied)
}

fn buy_reserved(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    index: usize,
) -> Result<ActionOutcome, GameError> {
    let Some(card) = state.player(player).reserved().get(index).cloned() else {
        return Ok(ActionOutcome::Rejected);
    };
    if !can_afford(state.player(player), &card) {
        return Ok(ActionOutcome::Rejected);
    }

    let payment = pay_for_card(state.player_mut(player), card)?;
    state.player_mut(player).take_reserved(index);
    state.bank.add_all(&payment);
    commit(state, player, action);
    Ok(ActionOutcome::Applied)
}

fn reserve_card(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    tier: Tier,
    index: Option<usize>,
    from_deck: bool,
    strategy: &mut dyn Strategy,
) -> ActionOutcome {
    if state.player(player).reserved().len() >= state.config().reserve_limit {
        return ActionOutcome::Rejected;
    }

    let t = tier.index();
    let card = if from_deck {
        let Some(card) = state.decks[t].pop_back() else {
            return ActionOutcome::Rejected;
        };
        card
    } else {
        let Some(index) = index.filter(|&i| i < state.table[t].len()) else {
            return ActionOutcome::Rejected;
        };
        let card = state.table[t].remove(index);
        refill_table(state);
        card
    };

    state.player_mut(player).reserve(card);
    commit(state, player, action);

    // An empty gold supply does not block the reservation.
    if state.bank[Color::Gold] > 0 {
        state.bank[Color::Gold] -= 1;
        state.player_mut(player).tokens[Color::Gold] += 1;
        enforce_token_limit(state, player, strategy);
    }
    ActionOutcome::Applied
}
