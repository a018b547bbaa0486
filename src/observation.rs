//! Numeric views of a game for learning and search.
//!
//! `observe` turns a `GameState` into an `Observation`: plain counts laid
//! out in canonical color order, with no engine types left in it. Costs,
//! discounts and noble requirements become per-color count vectors and
//! card colors become indices, so the result serializes into a stable
//! shape for external trainers.
//!
//! `Observation::features` flattens the same view into a fixed-length
//! `f32` vector from one player's perspective.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, GameState, Gems, Noble, PlayerId, PlayerState, COLOR_COUNT, TIER_COUNT};

/// Number of base colors.
const BASE_COUNT: usize = COLOR_COUNT - 1;

/// Features per player: tokens, discounts, score, reserved count, then
/// the is-current and is-perspective flags.
pub const FEATURES_PER_PLAYER: usize = 2 * COLOR_COUNT + 4;

/// Features per card slot: points, one-hot color, base-color cost.
pub const FEATURES_PER_CARD: usize = 1 + 2 * BASE_COUNT;

/// Features per noble slot: points, base-color requirements.
pub const FEATURES_PER_NOBLE: usize = 1 + BASE_COUNT;

/// A card as counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsCard {
    /// 1-based tier number.
    pub tier: u8,
    pub points: u32,
    /// Canonical index of the card's color.
    pub color_index: usize,
    /// Cost per base color.
    pub cost: [u32; BASE_COUNT],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsNoble {
    pub points: u32,
    /// Required discounts per base color.
    pub requirements: [u32; BASE_COUNT],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObsPlayer {
    /// Held tokens per color, gold last.
    pub tokens: [u32; COLOR_COUNT],
    /// Owned-card discounts per color. The gold entry is always 0.
    pub discounts: [u32; COLOR_COUNT],
    pub score: u32,
    pub cards: Vec<ObsCard>,
    pub reserved: Vec<ObsCard>,
    pub nobles: Vec<ObsNoble>,
}

/// Everything on the table, as counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub current_player: usize,
    pub bank: [u32; COLOR_COUNT],
    /// One entry per seat, in seat order.
    pub players: Vec<ObsPlayer>,
    /// Face-up cards per tier, tier 1 first.
    pub table: [Vec<ObsCard>; TIER_COUNT],
    pub decks_remaining: [usize; TIER_COUNT],
    pub available_nobles: Vec<ObsNoble>,
    /// Face-up slots per tier, used to pad `features`.
    pub table_slots: usize,
}

/// Build the full public view of `state`.
#[must_use]
pub fn observe(state: &GameState) -> Observation {
    Observation {
        current_player: state.current_player.index(),
        bank: all_colors(&state.bank),
        players: state.players.values().map(encode_player).collect(),
        table: std::array::from_fn(|i| state.table[i].iter().map(encode_card).collect()),
        decks_remaining: std::array::from_fn(|i| state.decks[i].len()),
        available_nobles: state.available_nobles().iter().map(encode_noble).collect(),
        table_slots: state.config().table_cards_per_tier,
    }
}

fn all_colors(gems: &Gems) -> [u32; COLOR_COUNT] {
    Color::ALL.map(|c| gems[c])
}

fn base_colors(gems: &Gems) -> [u32; BASE_COUNT] {
    Color::BASE.map(|c| gems[c])
}

fn encode_card(card: &Card) -> ObsCard {
    ObsCard {
        tier: card.tier().number(),
        points: card.points(),
        color_index: card.color().index(),
        cost: base_colors(card.cost()),
    }
}

fn encode_noble(noble: &Noble) -> ObsNoble {
    ObsNoble {
        points: noble.points(),
        requirements: base_colors(noble.requirements()),
    }
}

fn encode_player(player: &PlayerState) -> ObsPlayer {
    ObsPlayer {
        tokens: all_colors(&player.tokens),
        discounts: all_colors(&player.discounts),
        score: player.score(),
        cards: player.cards().iter().map(encode_card).collect(),
        reserved: player.reserved().iter().map(encode_card).collect(),
        nobles: player.nobles().iter().map(encode_noble).collect(),
    }
}

impl Observation {
    /// Length of `features` for this observation's seat count and table.
    #[must_use]
    pub fn feature_len(&self) -> usize {
        COLOR_COUNT
            + self.players.len() * FEATURES_PER_PLAYER
            + TIER_COUNT * self.table_slots * FEATURES_PER_CARD
            + TIER_COUNT
            + self.noble_slots() * FEATURES_PER_NOBLE
    }

    /// One noble slot per seat plus one, as dealt at setup.
    fn noble_slots(&self) -> usize {
        self.players.len() + 1
    }

    /// Flatten into a fixed-length vector of raw counts.
    ///
    /// Layout: bank, then each seat in order, then every table slot
    /// (empty slots are zeros), then deck sizes, then noble slots.
    #[must_use]
    pub fn features(&self, perspective: PlayerId) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.feature_len());
        out.extend(self.bank.iter().map(|&n| n as f32));

        for (index, player) in self.players.iter().enumerate() {
            out.extend(player.tokens.iter().map(|&n| n as f32));
            out.extend(player.discounts.iter().map(|&n| n as f32));
            out.push(player.score as f32);
            out.push(player.reserved.len() as f32);
            out.push(flag(index == self.current_player));
            out.push(flag(index == perspective.index()));
        }

        for row in &self.table {
            for slot in 0..self.table_slots {
                match row.get(slot) {
                    Some(card) => push_card(&mut out, card),
                    None => out.extend([0.0; FEATURES_PER_CARD]),
                }
            }
        }

        out.extend(self.decks_remaining.iter().map(|&n| n as f32));

        for slot in 0..self.noble_slots() {
            match self.available_nobles.get(slot) {
                Some(noble) => {
                    out.push(noble.points as f32);
                    out.extend(noble.requirements.iter().map(|&n| n as f32));
                }
                None => out.extend([0.0; FEATURES_PER_NOBLE]),
            }
        }

        out
    }
}

fn flag(set: bool) -> f32 {
    if set {
        1.0
    } else {
        0.0
    }
}

fn push_card(out: &mut Vec<f32>, card: &ObsCard) {
    out.push(card.points as f32);
    out.extend((0..BASE_COUNT).map(|i| flag(i == card.color_index)));
    out.extend(card.cost.iter().map(|&n| n as f32));
}
