//! Reference bot: follows the rules, does not plan.

use crate::core::{Action, Color, GameRng, GameRngState, GameState, PlayerId, Tier};
use crate::rules::{can_afford, can_take_double};

use super::Strategy;

/// Chance of buying when something on the table is affordable.
const BUY_CHANCE: f64 = 0.5;
/// Chance of reserving a face-up card instead.
const RESERVE_CHANCE: f64 = 0.2;
/// Chance of taking a double when one is available.
const DOUBLE_CHANCE: f64 = 0.5;

/// Random but legal-leaning play.
///
/// Each turn, in order:
/// 1. If any table card is affordable, buy one at random half the time.
/// 2. One time in five, reserve a random face-up card from a random tier.
/// 3. Half the time, take a double of a random color that allows it.
/// 4. Otherwise take up to `max_token_take` random distinct colors the bank
///    still has.
///
/// Never concedes. Discards and noble picks use the trait defaults.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Where this bot's random stream stands, for saving next to a
    /// `GameState` snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rebuild a bot saved with `rng_state`. It makes the same choices the
    /// saved bot would have made next.
    #[must_use]
    pub fn resume(saved: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(saved))
    }

    fn try_buy(&mut self, state: &GameState, player: PlayerId) -> Option<Action> {
        let me = state.player(player);
        let affordable: Vec<(Tier, usize)> = Tier::ALL
            .iter()
            .flat_map(|&tier| {
                state
                    .table_row(tier)
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| can_afford(me, card))
                    .map(move |(index, _)| (tier, index))
            })
            .collect();

        if affordable.is_empty() || !self.rng.gen_bool(BUY_CHANCE) {
            return None;
        }
        let &(tier, index) = self.rng.choose(&affordable)?;
        Some(Action::BuyCard { tier, index })
    }

    fn try_reserve(&mut self, state: &GameState) -> Option<Action> {
        if !self.rng.gen_bool(RESERVE_CHANCE) {
            return None;
        }
        let tier = *self.rng.choose(&Tier::ALL)?;
        let row = state.table_row(tier);
        if row.is_empty() {
            return None;
        }
        let index = self.rng.gen_range_usize(0..row.len());
        Some(Action::ReserveCard {
            tier,
            index: Some(index),
            from_deck: false,
        })
    }

    fn try_double(&mut self, state: &GameState) -> Option<Action> {
        if !self.rng.gen_bool(DOUBLE_CHANCE) {
            return None;
        }
        let doubles: Vec<Color> = Color::BASE
            .into_iter()
            .filter(|&c| can_take_double(state, c))
            .collect();
        let &color = self.rng.choose(&doubles)?;
        Some(Action::TakeDouble { color })
    }

    fn take_tokens(&mut self, state: &GameState) -> Action {
        let mut colors: Vec<Color> = Color::BASE
            .into_iter()
            .filter(|&c| state.bank[c] > 0)
            .collect();
        self.rng.shuffle(&mut colors);
        colors.truncate(state.config().max_token_take);
        Action::take_different(&colors)
    }
}

impl Strategy for RandomBot {
    fn choose_action(&mut self, state: &GameState, player: PlayerId) -> Option<Action> {
        let action = self
            .try_buy(state, player)
            .or_else(|| self.try_reserve(state))
            .or_else(|| self.try_double(state))
            .unwrap_or_else(|| self.take_tokens(state));
        Some(action)
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

    #[test]
    fn test_always_returns_an_action() {
        let state = state();
        let mut bot = RandomBot::new(7);

        for _ in 0..50 {
            assert!(bot.choose_action(&state, PlayerId::new(0)).is_some());
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let state = state();
        let mut a = RandomBot::new(99);
        let mut b = RandomBot::new(99);

        for _ in 0..20 {
            assert_eq!(
                a.choose_action(&state, PlayerId::new(0)),
                b.choose_action(&state, PlayerId::new(0))
            );
        }
    }

    #[test]
    fn test_resumed_bot_continues_the_stream() {
        let state = state();
        let mut original = RandomBot::new(5);
        for _ in 0..7 {
            original.choose_action(&state, PlayerId::new(0));
        }

        let json = serde_json::to_string(&original.rng_state()).unwrap();
        let saved: GameRngState = serde_json::from_str(&json).unwrap();
        let mut resumed = RandomBot::resume(&saved);

        for _ in 0..20 {
            assert_eq!(
                resumed.choose_action(&state, PlayerId::new(0)),
                original.choose_action(&state, PlayerId::new(0))
            );
        }
    }

    #[test]
    fn test_token_take_respects_bank() {
        let mut state = state();
        for color in [Color::White, Color::Blue, Color::Green, Color::Red] {
            state.bank[color] = 0;
        }
        state.bank[Color::Black] = 3;
        let mut bot = RandomBot::new(3);

        // Only black is left, and not enough of it for a double.
        for _ in 0..20 {
            let action = bot.choose_action(&state, PlayerId::new(0)).unwrap();
            assert_eq!(action, Action::take_different(&[Color::Black]));
        }
    }

    #[test]
    fn test_buys_only_affordable_cards() {
        let mut state = state();
        let free = Card::new(Tier::ONE, 1, Color::Red, Gems::new());
        let pricey = Card::new(Tier::ONE, 3, Color::Blue, Gems::from_pairs(&[(Color::Red, 7)]));
        state.table[Tier::ONE.index()] = vec![pricey, free];
        let mut bot = RandomBot::new(11);

        for _ in 0..50 {
            if let Some(Action::BuyCard { tier, index }) = bot.choose_action(&state, PlayerId::new(0)) {
                assert_eq!((tier, index), (Tier::ONE, 1));
            }
        }
    }
}
