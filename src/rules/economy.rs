//! Token economy: pricing, payment, and the token limit.
//!
//! A card's price in each base color is its cost minus the buyer's
//! discount in that color. Tokens of the matching color pay first and gold
//! covers whatever is left.

use crate::core::{Card, Color, GameError, GameEvent, GameState, Gems, PlayerId, PlayerState};
use crate::strategy::Strategy;

/// Check whether `player` can pay for `card` using discounts, tokens and gold.
///
/// Walks the base colors in canonical order, accumulating the shortfall not
/// covered by discounts and tokens, and stops as soon as it exceeds the
/// player's gold.
#[must_use]
pub fn can_afford(player: &PlayerState, card: &Card) -> bool {
    let gold = player.tokens[Color::Gold];
    let mut missing = 0;

    for color in Color::BASE {
        let covered = player.discounts[color] + player.tokens[color];
        missing += card.cost()[color].saturating_sub(covered);
        if missing > gold {
            return false;
        }
    }

    true
}

/// Pay for `card` and move it into the player's tableau.
///
/// Returns the tokens taken from the player so the caller can credit them
/// to the bank. The player must be able to afford the card; otherwise this
/// returns `GameError::CannotAfford` and the player is unchanged.
pub fn pay_for_card(player: &mut PlayerState, card: Card) -> Result<Gems, GameError> {
    if !can_afford(player, &card) {
        return Err(GameError::CannotAfford { card });
    }

    let mut payment = Gems::new();
    for color in Color::BASE {
        let effective_cost = card.cost()[color].saturating_sub(player.discounts[color]);

        let from_color = player.tokens[color].min(effective_cost);
        player.tokens[color] -= from_color;
        payment[color] += from_color;

        let shortfall = effective_cost - from_color;
        if shortfall > 0 {
            let from_gold = player.tokens[Color::Gold].min(shortfall);
            player.tokens[Color::Gold] -= from_gold;
            payment[Color::Gold] += from_gold;
        }
    }

    player.gain_card(card);
    Ok(payment)
}

/// Discard plan that removes `excess` tokens, one at a time, from whichever
/// color is most held (first in canonical order on ties).
///
/// Stops early if `tokens` run out.
#[must_use]
pub fn auto_discard(tokens: &Gems, excess: u32) -> Gems {
    let mut remaining = *tokens;
    let mut plan = Gems::new();

    for _ in 0..excess {
        let Some(color) = remaining.most_held() else {
            break;
        };
        remaining[color] -= 1;
        plan[color] += 1;
    }

    plan
}

/// Bring `player` back to the token limit.
///
/// The strategy proposes a plan first; it is applied clamped to what the
/// player actually holds. If that leaves the player over the limit, the
/// `auto_discard` fallback removes the rest. Discards go to the bank.
///
/// Returns everything discarded.
pub fn enforce_token_limit(
    state: &mut GameState,
    player: PlayerId,
    strategy: &mut dyn Strategy,
) -> Gems {
    let limit = state.config().token_limit;
    let total = state.player(player).total_tokens();
    if total <= limit {
        return Gems::new();
    }

    let plan = strategy.choose_discard(state, player, total - limit);
    let mut discarded = return_tokens(state, player, &plan);

    let held = state.player(player).total_tokens();
    if held > limit {
        let fallback = auto_discard(&state.player(player).tokens, held - limit);
        discarded.add_all(&return_tokens(state, player, &fallback));
    }

    let turn = state.turn;
    state.record(GameEvent::Discarded {
        player,
        tokens: discarded,
        turn,
    });
    discarded
}

/// Move up to `plan` tokens from the player to the bank. Returns what moved.
fn return_tokens(state: &mut GameState, player: PlayerId, plan: &Gems) -> Gems {
    let mut moved = Gems::new();
    for (color, wanted) in plan.nonzero() {
        let amount = wanted.min(state.player(player).tokens[color]);
        state.player_mut(player).tokens[color] -= amount;
        state.bank[color] += amount;
        moved[color] = amount;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameConfig, Tier};
    use std::sync::Arc;

    fn white_card() -> Card {
        Card::new(Tier::ONE, 1, Color::Blue, Gems::from_pairs(&[(Color::White, 3)]))
    }

    fn player_with(tokens: &[(Color, u32)], discounts: &[(Color, u32)]) -> PlayerState {
        let mut player = PlayerState::new();
        player.tokens = Gems::from_pairs(tokens);
        player.discounts = Gems::from_pairs(discounts);
        player
    }

    /// Returns a fixed plan regardless of what the player holds.
    struct PlanStrategy(Gems);

    impl Strategy for PlanStrategy {
        fn choose_action(&mut self, _: &GameState, _: PlayerId) -> Option<Action> {
            None
        }

        fn choose_discard(&mut self, _: &GameState, _: PlayerId, _: u32) -> Gems {
            self.0
        }
    }

    #[test]
    fn test_cannot_afford_without_gold() {
        let player = player_with(&[(Color::White, 1)], &[(Color::White, 1)]);
        assert!(!can_afford(&player, &white_card()));
    }

    #[test]
    fn test_gold_covers_shortfall() {
        let mut player = player_with(
            &[(Color::White, 1), (Color::Gold, 1)],
            &[(Color::White, 1)],
        );
        assert!(can_afford(&player, &white_card()));

        let payment = pay_for_card(&mut player, white_card()).unwrap();
        assert_eq!(payment, Gems::from_pairs(&[(Color::White, 1), (Color::Gold, 1)]));
        assert_eq!(player.tokens, Gems::new());
        assert_eq!(player.discounts[Color::Blue], 1);
        assert_eq!(player.discounts[Color::White], 1);
        assert_eq!(player.card_score(), 1);
    }

    #[test]
    fn test_discount_reduces_price() {
        let mut player = player_with(&[(Color::White, 2)], &[(Color::White, 1)]);
        let payment = pay_for_card(&mut player, white_card()).unwrap();
        assert_eq!(payment, Gems::from_pairs(&[(Color::White, 2)]));
    }

    #[test]
    fn test_colored_tokens_spent_before_gold() {
        let mut player = player_with(&[(Color::White, 3), (Color::Gold, 2)], &[]);
        let payment = pay_for_card(&mut player, white_card()).unwrap();
        assert_eq!(payment[Color::Gold], 0);
        assert_eq!(player.tokens[Color::Gold], 2);
    }

    #[test]
    fn test_unaffordable_payment_is_error() {
        let mut player = player_with(&[(Color::White, 1)], &[]);
        let before = player.clone();

        let err = pay_for_card(&mut player, white_card()).unwrap_err();
        assert!(matches!(err, GameError::CannotAfford { .. }));
        assert_eq!(player, before);
    }

    #[test]
    fn test_auto_discard_takes_from_most_held() {
        let tokens = Gems::from_pairs(&[(Color::Red, 4), (Color::Blue, 4), (Color::Gold, 1)]);
        let plan = auto_discard(&tokens, 3);
        // blue wins the first tie, then red leads, then the tie again goes to blue
        assert_eq!(plan, Gems::from_pairs(&[(Color::Blue, 2), (Color::Red, 1)]));
    }

    #[test]
    fn test_auto_discard_stops_when_empty() {
        let tokens = Gems::from_pairs(&[(Color::Green, 1)]);
        assert_eq!(auto_discard(&tokens, 5), tokens);
    }

    #[test]
    fn test_enforce_under_limit_is_noop() {
        let mut state = GameState::new(Arc::new(GameConfig::default()), 2);
        state.players[PlayerId::new(0)].tokens = Gems::uniform(2, 0);
        let before = state.clone();

        let discarded = enforce_token_limit(&mut state, PlayerId::new(0), &mut PlanStrategy(Gems::new()));

        assert!(discarded.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_enforce_clamps_plan_and_falls_back() {
        let mut state = GameState::new(Arc::new(GameConfig::default()), 2);
        let p0 = PlayerId::new(0);
        state.players[p0].tokens = Gems::from_pairs(&[(Color::Red, 6), (Color::Blue, 5), (Color::Gold, 1)]);
        state.bank[Color::Red] = 0;
        state.bank[Color::Blue] = 0;
        state.bank[Color::Gold] = 0;
        let totals = state.token_totals();

        // Asks for three white it does not have, and one blue.
        let plan = Gems::from_pairs(&[(Color::White, 3), (Color::Blue, 1)]);
        let discarded = enforce_token_limit(&mut state, p0, &mut PlanStrategy(plan));

        assert_eq!(state.player(p0).total_tokens(), 10);
        assert_eq!(discarded, Gems::from_pairs(&[(Color::Blue, 1), (Color::Red, 1)]));
        assert_eq!(state.bank[Color::Red], 1);
        assert_eq!(state.token_totals(), totals);
        assert!(matches!(state.history().back(), Some(GameEvent::Discarded { .. })));
    }

    #[test]
    fn test_enforce_honors_generous_plan() {
        let mut state = GameState::new(Arc::new(GameConfig::default()), 2);
        let p0 = PlayerId::new(0);
        state.players[p0].tokens = Gems::from_pairs(&[(Color::Green, 12)]);

        let plan = Gems::from_pairs(&[(Color::Green, 5)]);
        enforce_token_limit(&mut state, p0, &mut PlanStrategy(plan));

        assert_eq!(state.player(p0).tokens[Color::Green], 7);
    }
}
