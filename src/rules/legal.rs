//! Legal action enumeration for bots and search.

use crate::core::{Action, Color, GameState, PlayerId, Tier};

use super::economy::can_afford;
use super::engine::can_take_double;

/// Every action `player` could apply right now with an effect.
///
/// Token takes come first (subsets in canonical color order, smallest
/// first), then doubles, purchases, reserved purchases and reservations.
/// The player need not be the current one; nothing is mutated.
#[must_use]
pub fn legal_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    let me = state.player(player);
    let mut actions = Vec::new();

    let available: Vec<Color> = Color::BASE
        .into_iter()
        .filter(|&c| state.bank[c] > 0)
        .collect();
    let max_take = state.config().max_token_take.min(available.len());
    for size in 1..=max_take {
        let mut chosen = Vec::with_capacity(size);
        push_combinations(&available, size, &mut chosen, &mut actions);
    }

    actions.extend(
        Color::BASE
            .into_iter()
            .filter(|&color| can_take_double(state, color))
            .map(|color| Action::TakeDouble { color }),
    );

    for tier in Tier::ALL {
        for (index, card) in state.table_row(tier).iter().enumerate() {
            if can_afford(me, card) {
                actions.push(Action::BuyCard { tier, index });
            }
        }
    }

    for (index, card) in me.reserved().iter().enumerate() {
        if can_afford(me, card) {
            actions.push(Action::BuyCardReserved { index });
        }
    }

    if me.reserved().len() < state.config().reserve_limit {
        for tier in Tier::ALL {
            for index in 0..state.table_row(tier).len() {
                actions.push(Action::ReserveCard {
                    tier,
                    index: Some(index),
                    from_deck: false,
                });
            }
            if !state.deck(tier).is_empty() {
                actions.push(Action::ReserveCard {
                    tier,
                    index: None,
                    from_deck: true,
                });
            }
        }
    }

    actions
}

/// Push a `TakeDifferent` for every `size`-subset of `pool`, keeping order.
fn push_combinations(pool: &[Color], size: usize, chosen: &mut Vec<Color>, out: &mut Vec<Action>) {
    if chosen.len() == size {
        out.push(Action::take_different(chosen));
        return;
    }
    let needed = size - chosen.len();
    for i in 0..=pool.len().saturating_sub(needed) {
        chosen.push(pool[i]);
        push_combinations(&pool[i + 1..], size, chosen, out);
        chosen.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameConfig, Gems};
    use std::sync::Arc;

    fn state() -> GameState {
        GameState::new(Arc::new(GameConfig::default()), 2)
    }

    fn takes(actions: &[Action]) -> usize {
        actions
            .iter()
            .filter(|a| matches!(a, Action::TakeDifferent { .. }))
            .count()
    }

    #[test]
    fn test_opening_position() {
        let state = state();
        let actions = legal_actions(&state, PlayerId::new(0));

        // C(5,1) + C(5,2) + C(5,3) token takes, 5 doubles, nothing else.
        assert_eq!(takes(&actions), 5 + 10 + 10);
        assert_eq!(actions.len(), 25 + 5);
        assert_eq!(actions[0], Action::take_different(&[Color::White]));
    }

    #[test]
    fn test_takes_limited_by_bank() {
        let mut state = state();
        state.bank = Gems::from_pairs(&[(Color::Green, 1), (Color::Black, 3), (Color::Gold, 5)]);
        let actions = legal_actions(&state, PlayerId::new(0));

        assert_eq!(
            actions,
            vec![
                Action::take_different(&[Color::Green]),
                Action::take_different(&[Color::Black]),
                Action::take_different(&[Color::Green, Color::Black]),
            ]
        );
    }

    #[test]
    fn test_max_token_take_bounds_subset_size() {
        let config = GameConfig {
            max_token_take: 1,
            ..GameConfig::default()
        };
        let state = GameState::new(Arc::new(config), 2);

        assert_eq!(takes(&legal_actions(&state, PlayerId::new(0))), 5);
    }

    #[test]
    fn test_purchases_and_reserves() {
        let mut state = state();
        let free = Card::new(Tier::ONE, 0, Color::Red, Gems::new());
        let pricey = Card::new(Tier::TWO, 2, Color::Blue, Gems::from_pairs(&[(Color::Red, 5)]));
        state.table[0] = vec![free.clone()];
        state.table[1] = vec![pricey.clone()];
        state.set_deck(Tier::THREE, vec![Card::new(Tier::THREE, 4, Color::White, Gems::new())]);
        state.players[PlayerId::new(0)].reserve(free);
        state.players[PlayerId::new(0)].reserve(pricey);

        let actions = legal_actions(&state, PlayerId::new(0));

        assert!(actions.contains(&Action::BuyCard { tier: Tier::ONE, index: 0 }));
        assert!(!actions.contains(&Action::BuyCard { tier: Tier::TWO, index: 0 }));
        assert!(actions.contains(&Action::BuyCardReserved { index: 0 }));
        assert!(!actions.contains(&Action::BuyCardReserved { index: 1 }));
        assert!(actions.contains(&Action::ReserveCard {
            tier: Tier::TWO,
            index: Some(0),
            from_deck: false,
        }));
        assert!(actions.contains(&Action::ReserveCard {
            tier: Tier::THREE,
            index: None,
            from_deck: true,
        }));
        assert!(!actions.contains(&Action::ReserveCard {
            tier: Tier::ONE,
            index: None,
            from_deck: true,
        }));
    }

    #[test]
    fn test_full_reserve_blocks_reservations() {
        let mut state = state();
        state.table[0] = vec![Card::new(Tier::ONE, 0, Color::Red, Gems::from_pairs(&[(Color::Blue, 3)]))];
        for _ in 0..3 {
            state.players[PlayerId::new(0)]
                .reserve(Card::new(Tier::ONE, 0, Color::Red, Gems::from_pairs(&[(Color::Blue, 3)])));
        }

        let actions = legal_actions(&state, PlayerId::new(0));

        assert!(!actions.iter().any(Action::is_reserve));
    }

    #[test]
    fn test_does_not_mutate() {
        let state = state();
        let before = state.clone();
        let _ = legal_actions(&state, PlayerId::new(1));
        assert_eq!(state, before);
    }
}
