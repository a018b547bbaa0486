//! Buy-first bot.

use crate::core::{Action, Card, Color, GameRng, GameRngState, GameState, PlayerId, Tier};
use crate::rules::can_afford;

use super::Strategy;

/// Buys whenever it can, otherwise collects tokens.
///
/// Each turn, in order:
/// 1. Buy a random affordable reserved card.
/// 2. Buy a random affordable card from the cheapest tier that has one.
/// 3. Take `max_token_take` random colors if the bank has that many.
/// 4. Reserve blind from the cheapest non-empty deck.
/// 5. Take whatever colors are left.
#[derive(Clone, Debug)]
pub struct GreedyBot {
    rng: GameRng,
}

impl GreedyBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rebuild a bot saved with `rng_state`.
    #[must_use]
    pub fn resume(saved: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(saved),
        }
    }

    /// Random index among `cards` the player can afford.
    fn pick_affordable<'a>(
        &mut self,
        state: &GameState,
        player: PlayerId,
        cards: impl Iterator<Item = (usize, &'a Card)>,
    ) -> Option<usize> {
        let me = state.player(player);
        let affordable: Vec<usize> = cards
            .filter(|(_, card)| can_afford(me, card))
            .map(|(index, _)| index)
            .collect();
        self.rng.choose(&affordable).copied()
    }
}

impl Strategy for GreedyBot {
    fn choose_action(&mut self, state: &GameState, player: PlayerId) -> Option<Action> {
        let reserved = state.player(player).reserved();
        if let Some(index) = self.pick_affordable(state, player, reserved.iter().enumerate()) {
            return Some(Action::BuyCardReserved { index });
        }

        for tier in Tier::ALL {
            let row = state.table_row(tier);
            if let Some(index) = self.pick_affordable(state, player, row.iter().enumerate()) {
                return Some(Action::BuyCard { tier, index });
            }
        }

        let mut colors: Vec<Color> = Color::BASE
            .into_iter()
            .filter(|&c| state.bank[c] > 0)
            .collect();
        self.rng.shuffle(&mut colors);
        let take = state.config().max_token_take;
        if colors.len() >= take {
            colors.truncate(take);
            return Some(Action::take_different(&colors));
        }

        if let Some(tier) = Tier::ALL.into_iter().find(|&t| !state.deck(t).is_empty()) {
            return Some(Action::ReserveCard {
                tier,
                index: None,
                from_deck: true,
            });
        }

        Some(Action::take_different(&colors))
    }
}
