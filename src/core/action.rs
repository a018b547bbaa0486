//! Player moves and the game's event log.
//!
//! `Action` is a closed set of five moves, matched exhaustively by the rules.
//! Actions are requests: they come from untrusted strategies and may be
//! illegal, in which case the rules reject them without touching the state.
//!
//! `GameEvent` is what actually happened. Every applied action, noble award
//! and forced discard is appended to `GameState::history`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Tier;
use super::color::{Color, Gems};
use super::player::PlayerId;

/// A move requested by the active player.
///
/// ## Example
///
/// ```
/// use gemtrade::core::{Action, Color, Tier};
///
/// let take = Action::take_different(&[Color::White, Color::Blue, Color::Green]);
/// let buy = Action::BuyCard { tier: Tier::ONE, index: 2 };
/// let reserve_blind = Action::ReserveCard { tier: Tier::THREE, index: None, from_deck: true };
///
/// assert_ne!(take, buy);
/// assert!(reserve_blind.is_reserve());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// One token each of up to `max_token_take` distinct colors.
    TakeDifferent { colors: SmallVec<[Color; 3]> },

    /// Two tokens of one color.
    TakeDouble { color: Color },

    /// Buy a face-up card.
    BuyCard { tier: Tier, index: usize },

    /// Buy one of the player's own reserved cards.
    BuyCardReserved { index: usize },

    /// Reserve a face-up card (`index`) or the top card of a deck.
    ReserveCard {
        tier: Tier,
        index: Option<usize>,
        from_deck: bool,
    },
}

impl Action {
    #[must_use]
    pub fn take_different(colors: &[Color]) -> Self {
        Action::TakeDifferent {
            colors: SmallVec::from_slice(colors),
        }
    }

    /// Normal form used for comparing requests with enumerated moves.
    ///
    /// Color sets are sorted and deduplicated; a deck reservation drops
    /// the table index, which it never reads.
    #[must_use]
    pub fn canonical(&self) -> Action {
        match self {
            Action::TakeDifferent { colors } => {
                let mut colors = colors.clone();
                colors.sort_unstable();
                colors.dedup();
                Action::TakeDifferent { colors }
            }
            Action::ReserveCard {
                tier,
                from_deck: true,
                ..
            } => Action::ReserveCard {
                tier: *tier,
                index: None,
                from_deck: true,
            },
            other => other.clone(),
        }
    }

    #[must_use]
    pub fn is_reserve(&self) -> bool {
        matches!(self, Action::ReserveCard { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::TakeDifferent { colors } => {
                let names: Vec<_> = colors.iter().map(|c| c.name()).collect();
                write!(f, "take {}", names.join("+"))
            }
            Action::TakeDouble { color } => write!(f, "take 2 {color}"),
            Action::BuyCard { tier, index } => write!(f, "buy {tier} #{index}"),
            Action::BuyCardReserved { index } => write!(f, "buy reserved #{index}"),
            Action::ReserveCard {
                tier,
                from_deck: true,
                ..
            } => write!(f, "reserve top of {tier} deck"),
            Action::ReserveCard { tier, index, .. } => match index {
                Some(i) => write!(f, "reserve {tier} #{i}"),
                None => write!(f, "reserve {tier} #?"),
            },
        }
    }
}

/// Result of asking the rules to apply an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The state changed.
    Applied,
    /// The move was illegal and nothing changed. The turn is still spent.
    Rejected,
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == ActionOutcome::Applied
    }
}

/// An applied action with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}

/// Entry in the game's event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Action(ActionRecord),

    /// Tokens returned to the bank to get back under the token limit.
    Discarded {
        player: PlayerId,
        tokens: Gems,
        turn: u32,
    },

    NobleAwarded {
        player: PlayerId,
        noble: String,
        turn: u32,
    },

    /// The game ended with this player on top.
    Won { player: PlayerId, turn: u32 },
}
