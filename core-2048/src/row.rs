use std::cmp;

use crate::{Tile, SIZE};

pub type Row = [Tile; SIZE];

/// The effect of sliding one or more rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    pub changed: bool,
    /// Sum of the tiles created by merges.
    pub score: u32,
    /// Largest tile created by a merge, or `Tile::EMPTY` if nothing merged.
    pub highest: Tile,
}

impl Slide {
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            changed: self.changed || other.changed,
            score: self.score + other.score,
            highest: cmp::max(self.highest, other.highest),
        }
    }
}

/// Moves every empty cell to the right end of the row, keeping the order of the
/// non-empty tiles. Returns whether the row changed.
pub fn compress(row: &mut Row) -> bool {
    let mut packed = [Tile::EMPTY; SIZE];

    for (slot, &tile) in packed
        .iter_mut()
        .zip(row.iter().filter(|tile| !tile.is_empty()))
    {
        *slot = tile;
    }

    let changed = packed != *row;
    *row = packed;

    changed
}

/// Merges equal neighbours in a single left to right sweep, then closes the gaps.
///
/// Expects a compressed row. A tile produced by a merge is never merged again in
/// the same sweep, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn merge(row: &mut Row) -> Slide {
    let mut slide = Slide::default();

    for i in 0..SIZE - 1 {
        if !row[i].is_empty() && row[i] == row[i + 1] {
            row[i] = row[i].doubled();
            row[i + 1] = Tile::EMPTY;

            slide.changed = true;
            slide.score += row[i].value();
            slide.highest = cmp::max(slide.highest, row[i]);
        }
    }

    compress(row);

    slide
}

/// Compresses then merges the row towards index 0.
pub fn slide_left(row: &mut Row) -> Slide {
    let compressed = compress(row);
    let merged = merge(row);

    Slide {
        changed: compressed || merged.changed,
        ..merged
    }
}
