use std::ops::ControlFlow;

use clap::ValueEnum;
use rand::Rng;
use tracing::{debug, trace};

use lib_2048::{Board, Direction, Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// One move lookahead: most empty cells, then highest score
    Auto,
    /// Any of the four directions, chosen uniformly
    Random,
}

#[derive(Clone, Copy, Debug)]
pub struct GameSummary {
    pub moves: u32,
    /// Moves that changed nothing.
    pub wasted: u32,
    pub score: u32,
    pub max_tile: Tile,
    /// False when the game stopped at the move cap rather than running out of moves.
    pub finished: bool,
}

fn step(board: &mut Board<impl Rng>, policy: Policy) -> (Direction, bool) {
    let before = *board.grid();

    let direction = match policy {
        Policy::Auto => board.auto_move(),
        Policy::Random => board.random_move(),
    };

    (direction, *board.grid() != before)
}

/// Plays `board` with `policy` until no move is possible, or until `max_moves`
/// moves if it is non-zero.
pub fn play(board: &mut Board<impl Rng>, policy: Policy, max_moves: u32) -> GameSummary {
    let mut summary = GameSummary {
        moves: 0,
        wasted: 0,
        score: board.score(),
        max_tile: board.max_tile(),
        finished: false,
    };

    let flow = (0..).try_for_each(|_| {
        if !board.can_move() {
            return ControlFlow::Break(true);
        }

        if max_moves != 0 && summary.moves >= max_moves {
            return ControlFlow::Break(false);
        }

        let (direction, changed) = step(board, policy);

        summary.moves += 1;
        if !changed {
            summary.wasted += 1;
            trace!(%direction, "wasted move");
        }

        ControlFlow::Continue(())
    });

    summary.finished = matches!(flow, ControlFlow::Break(true));
    summary.score = board.score();
    summary.max_tile = board.max_tile();

    debug!(?summary, "game stopped");

    summary
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn auto_never_wastes_a_move() {
        let mut board = Board::from_seed(11);
        let summary = play(&mut board, Policy::Auto, 0);

        assert!(summary.finished);
        assert_eq!(summary.wasted, 0);
        assert_eq!(summary.score, board.score());
        assert!(!board.can_move());
    }

    #[test]
    fn random_play_finishes() {
        let mut board = Board::new(ChaCha8Rng::seed_from_u64(12));
        let summary = play(&mut board, Policy::Random, 0);

        assert!(summary.finished);
        assert!(summary.moves >= summary.wasted);
    }

    #[test]
    fn move_cap_stops_early() {
        let mut board = Board::from_seed(13);
        let summary = play(&mut board, Policy::Auto, 5);

        assert!(!summary.finished);
        assert_eq!(summary.moves, 5);
        assert_eq!(board.history_len(), 5);
    }

    #[test]
    fn finished_board_plays_nothing() {
        let grid = "2 4 2 4 / 4 2 4 2 / 2 4 2 4 / 4 2 4 2".parse().unwrap();
        let mut board = Board::from_grid(grid, ChaCha8Rng::seed_from_u64(14));
        let summary = play(&mut board, Policy::Random, 0);

        assert!(summary.finished);
        assert_eq!(summary.moves, 0);
    }
}
