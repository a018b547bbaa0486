//! Stock card and noble pools.
//!
//! The engine takes its cards and nobles from `GameConfig`. These pools
//! are a ready-made, Splendor-shaped set for demos, tests and benchmarks.
//! The cards are generated, not the published deck.

use crate::core::{Card, Color, GameRng, Gems, Noble, Tier};

/// How one tier's cards are generated.
struct TierRecipe {
    tier: Tier,
    cards_per_color: usize,
    cost_choices: &'static [u32],
    point_choices: &'static [u32],
}

const RECIPES: [TierRecipe; 3] = [
    TierRecipe {
        tier: Tier::ONE,
        cards_per_color: 5,
        cost_choices: &[0, 1, 1, 2],
        point_choices: &[0, 0, 1],
    },
    TierRecipe {
        tier: Tier::TWO,
        cards_per_color: 4,
        cost_choices: &[2, 3, 4],
        point_choices: &[1, 2, 2, 3],
    },
    TierRecipe {
        tier: Tier::THREE,
        cards_per_color: 3,
        cost_choices: &[4, 5, 6],
        point_choices: &[3, 4, 5],
    },
];

/// Points on every stock noble.
pub const NOBLE_POINTS: u32 = 3;

/// Generate the stock card pool, shuffled.
///
/// Every base color gets 5 tier-1, 4 tier-2 and 3 tier-3 cards (60 in
/// all). A card costs a random amount of each of the four other colors
/// and nothing of its own.
#[must_use]
pub fn standard_cards(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(60);

    for recipe in &RECIPES {
        for color in Color::BASE {
            for _ in 0..recipe.cards_per_color {
                let mut cost = Gems::new();
                for other in Color::BASE.into_iter().filter(|&c| c != color) {
                    cost[other] = pick(rng, recipe.cost_choices);
                }
                let points = pick(rng, recipe.point_choices);
                cards.push(Card::new(recipe.tier, points, color, cost));
            }
        }
    }

    rng.shuffle(&mut cards);
    cards
}

fn pick(rng: &mut GameRng, choices: &[u32]) -> u32 {
    choices[rng.gen_range_usize(0..choices.len())]
}

/// The eight stock nobles, "Noble 1" through "Noble 8".
///
/// Five want three discounts in each of three colors, three want four in
/// each of two.
#[must_use]
pub fn standard_nobles() -> Vec<Noble> {
    use Color::{Black, Blue, Green, Red, White};

    let requirements: [&[(Color, u32)]; 8] = [
        &[(White, 3), (Blue, 3), (Green, 3)],
        &[(Blue, 3), (Green, 3), (Red, 3)],
        &[(Green, 3), (Red, 3), (Black, 3)],
        &[(Red, 3), (Black, 3), (White, 3)],
        &[(Black, 3), (White, 3), (Blue, 3)],
        &[(White, 4), (Blue, 4)],
        &[(Green, 4), (Red, 4)],
        &[(Blue, 4), (Black, 4)],
    ];

    requirements
        .iter()
        .enumerate()
        .map(|(i, pairs)| Noble::new(format!("Noble {}", i + 1), NOBLE_POINTS, Gems::from_pairs(pairs)))
        .collect()
}
