//! Gem colors and per-color counts.
//!
//! ## Color
//!
//! Five base colors plus `Gold`. The declaration order is canonical: every
//! iteration, tie-break and serialized layout in the engine follows it.
//!
//! ## Gems
//!
//! A fixed-size per-color counter used for token holdings, card costs,
//! discounts and noble requirements. Backed by an array so cloning a
//! player or the bank never allocates.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of token colors, gold included.
pub const COLOR_COUNT: usize = 6;

/// Token color.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White = 0,
    Blue = 1,
    Green = 2,
    Red = 3,
    Black = 4,
    /// Wildcard. Never part of a cost or requirement.
    Gold = 5,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::White,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Black,
        Color::Gold,
    ];

    /// The five base colors in canonical order.
    pub const BASE: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Black,
    ];

    /// Position in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a canonical index back into a color.
    #[must_use]
    pub fn from_index(idx: usize) -> Option<Color> {
        Color::ALL.get(idx).copied()
    }

    /// True for every color except gold.
    #[must_use]
    pub const fn is_base(self) -> bool {
        !matches!(self, Color::Gold)
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
            Color::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color counts.
///
/// ```
/// use gemtrade::core::{Color, Gems};
///
/// let mut cost = Gems::from_pairs(&[(Color::White, 3), (Color::Red, 1)]);
/// assert_eq!(cost[Color::White], 3);
/// assert_eq!(cost.total(), 4);
///
/// cost[Color::Red] += 2;
/// assert_eq!(cost.get(Color::Red), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gems([u32; COLOR_COUNT]);

impl Gems {
    /// All counts zero.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; COLOR_COUNT])
    }

    /// Build from `(color, count)` pairs. Repeated colors accumulate.
    #[must_use]
    pub fn from_pairs(pairs: &[(Color, u32)]) -> Self {
        let mut gems = Self::new();
        for &(color, count) in pairs {
            gems[color] += count;
        }
        gems
    }

    /// Same count for every base color, plus a separate gold count.
    #[must_use]
    pub fn uniform(base: u32, gold: u32) -> Self {
        let mut gems = Self([base; COLOR_COUNT]);
        gems[Color::Gold] = gold;
        gems
    }

    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.0[color.index()]
    }

    /// Sum over all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// True if every count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Largest base-color count (gold ignored).
    #[must_use]
    pub fn max_base(&self) -> u32 {
        Color::BASE.iter().map(|&c| self.get(c)).max().unwrap_or(0)
    }

    /// Color with the highest count, first in canonical order on ties.
    ///
    /// Returns `None` when every count is zero.
    #[must_use]
    pub fn most_held(&self) -> Option<Color> {
        let mut best: Option<Color> = None;
        for color in Color::ALL {
            let count = self.get(color);
            if count == 0 {
                continue;
            }
            if best.map_or(true, |b| count > self.get(b)) {
                best = Some(color);
            }
        }
        best
    }

    /// Add every count from `other`.
    pub fn add_all(&mut self, other: &Gems) {
        for color in Color::ALL {
            self[color] += other[color];
        }
    }

    /// Iterate `(color, count)` in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate colors with a non-zero count.
    pub fn nonzero(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl Index<Color> for Gems {
    type Output = u32;

    fn index(&self, color: Color) -> &Self::Output {
        &self.0[color.index()]
    }
}

impl IndexMut<Color> for Gems {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.0[color.index()]
    }
}

impl std::fmt::Display for Gems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        f.write_str("{")?;
        for (color, count) in self.nonzero() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{color}: {count}")?;
            first = false;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Some(*color));
        }
        assert_eq!(Color::from_index(6), None);
        assert_eq!(&Color::ALL[..5], &Color::BASE);
    }

    #[test]
    fn test_gold_is_not_base() {
        assert!(!Color::Gold.is_base());
        assert!(Color::BASE.iter().all(|c| c.is_base()));
    }

    #[test]
    fn test_from_pairs_accumulates() {
        let gems = Gems::from_pairs(&[(Color::Blue, 1), (Color::Blue, 2), (Color::Gold, 1)]);
        assert_eq!(gems[Color::Blue], 3);
        assert_eq!(gems[Color::Gold], 1);
        assert_eq!(gems.total(), 4);
    }

    #[test]
    fn test_uniform() {
        let bank = Gems::uniform(4, 5);
        for color in Color::BASE {
            assert_eq!(bank[color], 4);
        }
        assert_eq!(bank[Color::Gold], 5);
        assert_eq!(bank.total(), 25);
    }

    #[test]
    fn test_most_held_ties_break_canonically() {
        let gems = Gems::from_pairs(&[(Color::Red, 3), (Color::Blue, 3), (Color::Gold, 1)]);
        assert_eq!(gems.most_held(), Some(Color::Blue));
        assert_eq!(Gems::new().most_held(), None);
    }

    #[test]
    fn test_max_base_ignores_gold() {
        let gems = Gems::from_pairs(&[(Color::Gold, 9), (Color::Green, 2)]);
        assert_eq!(gems.max_base(), 2);
    }

    #[test]
    fn test_display() {
        let gems = Gems::from_pairs(&[(Color::White, 2), (Color::Black, 1)]);
        assert_eq!(format!("{gems}"), "{white: 2, black: 1}");
        assert_eq!(format!("{}", Color::Gold), "gold");
    }

    #[test]
    fn test_serde() {
        let gems = Gems::from_pairs(&[(Color::Red, 4)]);
        let json = serde_json::to_string(&gems).unwrap();
        let back: Gems = serde_json::from_str(&json).unwrap();
        assert_eq!(gems, back);
    }
}
