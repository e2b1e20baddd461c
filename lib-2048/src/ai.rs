//! One move lookahead: every direction is tried on a copy of the position and the
//! one leaving the most room (then the most score) wins.

use crate::{direction::Direction, history::Snapshot, logic};

pub mod efficiency;

pub use efficiency::MoveEfficiency;

/// Measures moving `position` towards `direction` without touching any live board.
///
/// A changed move reports the empty cells left once the follow-up tile has been
/// spawned, and the score after the move.
pub fn evaluate(position: &Snapshot, direction: Direction) -> MoveEfficiency {
    match logic::try_move(&position.grid, direction) {
        Some((grid, slide)) => {
            let empty_tiles = grid.empty_count().saturating_sub(1) as i32;

            MoveEfficiency::new(empty_tiles, position.score + slide.score, direction)
        }
        None => MoveEfficiency::unchanged(direction),
    }
}

/// The best ranked direction for `position`. Ties go to the earlier direction in
/// `Direction::ALL`, so a stalemate picks `Direction::Left`.
pub fn pick_best(position: &Snapshot) -> Direction {
    let [first, rest @ ..] = Direction::ALL.map(|direction| evaluate(position, direction));

    rest.into_iter()
        .fold(first, |best, candidate| {
            if candidate > best {
                candidate
            } else {
                best
            }
        })
        .direction
}
