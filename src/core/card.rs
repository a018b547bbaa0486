//! Development cards and noble tiles.
//!
//! Both are immutable values: once built they are only moved between the
//! decks, the table and player holdings, never edited.

use serde::{Deserialize, Serialize};

use super::color::{Color, Gems};

/// Number of card tiers.
pub const TIER_COUNT: usize = 3;

/// Card strength class, 1 (cheap) to 3 (expensive).
///
/// Only valid tiers can be constructed, so a `Tier` can always index the
/// per-tier decks and table rows directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const ONE: Tier = Tier(1);
    pub const TWO: Tier = Tier(2);
    pub const THREE: Tier = Tier(3);

    /// All tiers, cheapest first.
    pub const ALL: [Tier; TIER_COUNT] = [Tier::ONE, Tier::TWO, Tier::THREE];

    /// Create a tier from its number (1-3).
    #[must_use]
    pub const fn new(tier: u8) -> Option<Tier> {
        match tier {
            1..=3 => Some(Tier(tier)),
            _ => None,
        }
    }

    /// Tier number, 1-3.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot for per-tier arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::new(value).ok_or_else(|| format!("invalid tier {value}, expected 1-3"))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

/// Development card: victory points plus a permanent discount.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    tier: Tier,
    points: u32,
    color: Color,
    cost: Gems,
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// If `color` is gold or `cost` contains gold.
    #[must_use]
    pub fn new(tier: Tier, points: u32, color: Color, cost: Gems) -> Self {
        assert!(color.is_base(), "Card color must be a base color");
        assert_eq!(cost[Color::Gold], 0, "Card cost cannot include gold");
        Self {
            tier,
            points,
            color,
            cost,
        }
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// The color this card discounts once owned.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn cost(&self) -> &Gems {
        &self.cost
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[T{} {} +{}pt cost {}]",
            self.tier.number(),
            self.color,
            self.points,
            self.cost
        )
    }
}

/// Noble tile, claimed by reaching discount thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Noble {
    name: String,
    points: u32,
    requirements: Gems,
}

impl Noble {
    /// Create a noble.
    ///
    /// # Panics
    ///
    /// If `requirements` contains gold.
    pub fn new(name: impl Into<String>, points: u32, requirements: Gems) -> Self {
        assert_eq!(requirements[Color::Gold], 0, "Noble requirements cannot include gold");
        Self {
            name: name.into(),
            points,
            requirements,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Discount counts required, per color.
    #[must_use]
    pub fn requirements(&self) -> &Gems {
        &self.requirements
    }

    /// Smallest single-color requirement among the colors this noble asks for.
    ///
    /// Zero if the noble has no requirements at all.
    #[must_use]
    pub fn min_requirement(&self) -> u32 {
        self.requirements.nonzero().map(|(_, n)| n).min().unwrap_or(0)
    }

    /// True if `discounts` cover every requirement.
    #[must_use]
    pub fn is_met_by(&self, discounts: &Gems) -> bool {
        Color::BASE
            .iter()
            .all(|&c| discounts[c] >= self.requirements[c])
    }
}

impl std::fmt::Display for Noble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (+{}pt, needs {})", self.name, self.points, self.requirements)
    }
}
