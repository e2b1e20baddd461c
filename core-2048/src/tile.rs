use std::fmt;

use crate::GridError;

/// The value held by a single cell. `0` is an empty cell, anything else is a power of two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u32);

impl Tile {
    pub const EMPTY: Self = Self(0);
    pub const TWO: Self = Self(2);
    pub const FOUR: Self = Self(4);
    /// Largest tile a grid may be built with: the highest tile reachable on a 4x4
    /// grid. Merging tiles no larger than this can never overflow a `u32`.
    pub const MAX: Self = Self(1 << 17);

    pub fn new(value: u32) -> Result<Self, GridError> {
        if value == 0 || (value >= 2 && value <= Self::MAX.0 && value.is_power_of_two()) {
            Ok(Self(value))
        } else {
            Err(GridError::InvalidTile(value))
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile produced by merging two copies of `self`.
    pub const fn doubled(self) -> Self {
        Self(self.0 << 1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.pad(".")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_and_powers_of_two() {
        for value in [0, 2, 4, 8, 2048, Tile::MAX.value()] {
            assert_eq!(Tile::new(value).map(Tile::value), Ok(value));
        }
    }

    #[test]
    fn rejects_other_values() {
        for value in [1, 3, 6, 100, 1 << 18, 1 << 30, 1 << 31, u32::MAX] {
            assert_eq!(Tile::new(value), Err(GridError::InvalidTile(value)));
        }
    }

    #[test]
    fn doubling() {
        assert_eq!(Tile::TWO.doubled(), Tile::FOUR);
        assert_eq!(Tile::new(1024).unwrap().doubled().value(), 2048);
    }

    #[test]
    fn display_pads_like_numbers() {
        assert_eq!(format!("{:>4}", Tile::EMPTY), "   .");
        assert_eq!(format!("{:>4}", Tile::new(64).unwrap()), "  64");
    }
}
