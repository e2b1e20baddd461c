use std::cmp::Ordering;

use crate::direction::Direction;

/// How good a candidate move looks one move ahead.
///
/// Ordering compares `empty_tiles` first, then `score`; `direction` only labels the
/// candidate and takes no part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct MoveEfficiency {
    /// Empty cells left after the move and its spawned tile, or `-1` if the move
    /// changes nothing.
    pub empty_tiles: i32,
    /// Score after the move, or `0` if the move changes nothing.
    pub score: u32,
    pub direction: Direction,
}

impl MoveEfficiency {
    pub const UNCHANGED_EMPTY_TILES: i32 = -1;

    pub const fn new(empty_tiles: i32, score: u32, direction: Direction) -> Self {
        Self {
            empty_tiles,
            score,
            direction,
        }
    }

    /// The entry for a move that leaves the grid as it was. Ranks below any move that changes it.
    pub const fn unchanged(direction: Direction) -> Self {
        Self::new(Self::UNCHANGED_EMPTY_TILES, 0, direction)
    }

    pub const fn is_unchanged(&self) -> bool {
        self.empty_tiles == Self::UNCHANGED_EMPTY_TILES
    }

    const fn key(&self) -> (i32, u32) {
        (self.empty_tiles, self.score)
    }
}

impl PartialEq for MoveEfficiency {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for MoveEfficiency {}

impl PartialOrd for MoveEfficiency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MoveEfficiency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tiles_outrank_score() {
        let roomy = MoveEfficiency::new(5, 0, Direction::Up);
        let rich = MoveEfficiency::new(4, 1000, Direction::Down);

        assert!(roomy > rich);
    }

    #[test]
    fn score_breaks_ties() {
        let low = MoveEfficiency::new(5, 8, Direction::Left);
        let high = MoveEfficiency::new(5, 12, Direction::Right);

        assert!(high > low);
        assert_eq!(low.cmp(&MoveEfficiency::new(5, 8, Direction::Down)), Ordering::Equal);
    }

    #[test]
    fn unchanged_ranks_last() {
        let unchanged = MoveEfficiency::unchanged(Direction::Left);
        let full = MoveEfficiency::new(0, 0, Direction::Right);

        assert!(unchanged.is_unchanged());
        assert!(!full.is_unchanged());
        assert!(unchanged < full);
        assert_eq!(unchanged.score, 0);
    }
}
