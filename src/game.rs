//! Game setup, the turn loop, and single-step simulation.
//!
//! A `Game` owns a `GameState` plus one `Strategy` per seat. The state
//! itself never holds strategies, so it stays `Clone + Send + Sync` and
//! search code can copy it freely through `simulate_step`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::{Action, Card, GameConfig, GameError, GameEvent, GameRng, GameState, PlayerId, Tier};
use crate::rules::{apply_action, best_player, check_nobles_for_player, check_winner, refill_table};
use crate::strategy::{SimStrategy, Strategy};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Someone reached `win_score`.
    WinScore,
    /// A strategy returned no action.
    Conceded,
    /// `turn_limit` turns were played without a winner.
    TurnLimit,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// Turns played, counting the last one.
    pub turns: u32,
    pub reason: EndReason,
}

/// Build the opening state for `player_count` seats.
///
/// Decks are the config's cards split by tier and shuffled; `player_count
/// + 1` nobles are drawn at random; then the table is dealt. Everything
/// random comes from `seed`, so equal inputs give equal states.
pub fn new_state(config: GameConfig, player_count: usize, seed: u64) -> Result<GameState, GameError> {
    config.validate()?;
    if player_count == 0 {
        return Err(GameError::NoPlayers);
    }
    if player_count > usize::from(u8::MAX) {
        return Err(GameError::TooManyPlayers(player_count));
    }

    let rng = GameRng::new(seed);
    let config = Arc::new(config);
    let mut state = GameState::new(Arc::clone(&config), player_count);

    let mut deck_rng = rng.for_context("decks");
    for tier in Tier::ALL {
        let mut deck: Vec<Card> = config.cards.iter().filter(|c| c.tier() == tier).cloned().collect();
        deck_rng.shuffle(&mut deck);
        state.set_deck(tier, deck);
    }

    let mut nobles = config.nobles.clone();
    rng.for_context("nobles").shuffle(&mut nobles);
    nobles.truncate(player_count + 1);
    state.set_available_nobles(nobles);

    refill_table(&mut state);
    Ok(state)
}

/// Set up a game with one seat per strategy, in the order given.
pub fn new_game(strategies: Vec<Box<dyn Strategy>>, config: GameConfig, seed: u64) -> Result<Game, GameError> {
    let state = new_state(config, strategies.len(), seed)?;
    Game::from_state(state, strategies)
}

/// A game in progress.
pub struct Game {
    state: GameState,
    strategies: Vec<Box<dyn Strategy>>,
    turns: u32,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Seat `strategies` at an existing state, such as one restored from a
    /// snapshot. Play continues from `state.current_player`, and turns
    /// already taken count toward `turn_limit`.
    pub fn from_state(state: GameState, strategies: Vec<Box<dyn Strategy>>) -> Result<Game, GameError> {
        if strategies.len() != state.player_count() {
            return Err(GameError::SeatMismatch {
                seats: state.player_count(),
                strategies: strategies.len(),
            });
        }
        Ok(Game {
            turns: state.turn.saturating_sub(1),
            state,
            strategies,
            outcome: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Play one turn for the current seat.
    ///
    /// Returns the outcome once the game is over; later calls keep
    /// returning it without playing.
    pub fn step(&mut self) -> Result<Option<GameOutcome>, GameError> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        self.turns += 1;
        let player = self.state.current_player;
        let strategy = self.strategies[player.index()].as_mut();

        let Some(action) = strategy.choose_action(&self.state, player) else {
            return Ok(Some(self.finish_early(EndReason::Conceded)));
        };

        apply_action(&mut self.state, &action, strategy)?;
        check_nobles_for_player(&mut self.state, player, strategy);

        if let Some(winner) = check_winner(&mut self.state) {
            return Ok(Some(self.conclude(winner, EndReason::WinScore)));
        }

        self.state.next_player();
        if self.turns >= self.state.config().turn_limit {
            return Ok(Some(self.finish_early(EndReason::TurnLimit)));
        }
        Ok(None)
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// End without a threshold winner: the leading player takes it.
    fn finish_early(&mut self, reason: EndReason) -> GameOutcome {
        let winner = best_player(&self.state);
        self.state.finished = true;
        let turn = self.state.turn;
        self.state.record(GameEvent::Won { player: winner, turn });
        self.conclude(winner, reason)
    }

    fn conclude(&mut self, winner: PlayerId, reason: EndReason) -> GameOutcome {
        let outcome = GameOutcome {
            winner,
            turns: self.turns,
            reason,
        };
        self.outcome = Some(outcome);
        outcome
    }
}

/// Apply `action` for the current player to a copy of `state`.
///
/// Discard and noble prompts get the default answers. Nobles are checked
/// and the turn passes to the next seat, but the winner is not checked.
/// `state` is never touched, and the copy shares no mutable data with it,
/// so many threads may simulate from one shared state at once.
///
/// The copy carries the whole event log plus this step's entries. The log
/// is structurally shared, so the cost is per new event, but it never
/// shrinks on its own: deep search lines can call
/// `GameState::clear_history` on their root copy.
pub fn simulate_step(state: &GameState, action: &Action) -> Result<GameState, GameError> {
    let mut next = state.clone();
    let player = next.current_player;
    let mut stand_in = SimStrategy;

    apply_action(&mut next, action, &mut stand_in)?;
    check_nobles_for_player(&mut next, player, &mut stand_in);
    next.next_player();
    Ok(next)
}
