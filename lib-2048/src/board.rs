use std::cmp;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use core_2048::{Grid, Slide, Tile};

use crate::{
    ai,
    direction::Direction,
    history::{History, Snapshot},
    logic,
};

/// A game session: the live grid, score, highest tile and undo history.
///
/// All randomness (tile spawns and `random_move`) comes from the `rng` the board
/// was built with, so a seeded generator makes a whole game reproducible.
#[derive(Clone, Debug)]
pub struct Board<R> {
    grid: Grid,
    score: u32,
    max_tile: Tile,
    history: History,
    rng: R,
}

impl Board<ChaCha8Rng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> Board<R>
where
    R: Rng,
{
    /// Starts a game with two random tiles.
    pub fn new(rng: R) -> Self {
        let mut board = Self {
            grid: Grid::empty(),
            score: 0,
            max_tile: Tile::TWO,
            history: History::new(),
            rng,
        };

        board.reset();
        board
    }

    /// Starts from a given grid with no score and no history.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            score: 0,
            max_tile: cmp::max(Tile::TWO, grid.max_tile()),
            history: History::new(),
            rng,
        }
    }

    /// Caps the undo history at `limit` snapshots.
    #[must_use]
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.history = History::with_limit(limit);
        self
    }

    pub fn reset(&mut self) {
        self.grid = Grid::empty();

        logic::spawn_tile(&mut self.rng, &mut self.grid);
        logic::spawn_tile(&mut self.rng, &mut self.grid);

        self.score = 0;
        self.max_tile = Tile::TWO;
        self.history.clear();

        debug!(grid = %self.grid, "board reset");
    }

    /// Applies one move towards `direction`.
    ///
    /// Always saves exactly one snapshot first, even when nothing moves, so each
    /// call can be undone with one `rollback`. A tile is spawned only if the grid
    /// changed.
    pub fn apply(&mut self, direction: Direction) -> Slide {
        let snapshot = self.snapshot();
        self.history.push(snapshot);

        let slide = logic::do_move(&mut self.grid, direction);

        if slide.changed {
            self.score += slide.score;
            self.max_tile = cmp::max(self.max_tile, slide.highest);

            let spawned = logic::spawn_tile(&mut self.rng, &mut self.grid);

            debug!(
                %direction,
                gained = slide.score,
                score = self.score,
                ?spawned,
                "move applied"
            );
        } else {
            trace!(%direction, "move changed nothing");
        }

        slide
    }

    pub fn move_left(&mut self) {
        self.apply(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.apply(Direction::Right);
    }

    pub fn move_up(&mut self) {
        self.apply(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.apply(Direction::Down);
    }

    /// Plays the direction the move evaluator ranks best.
    pub fn auto_move(&mut self) -> Direction {
        let direction = ai::pick_best(&self.snapshot());

        self.apply(direction);
        direction
    }

    /// Plays one of the four directions chosen uniformly, whether or not it can move.
    pub fn random_move(&mut self) -> Direction {
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];

        self.apply(direction);
        direction
    }

    /// Restores the grid and score saved by the most recent move. Does nothing and
    /// returns `false` when there is no saved move.
    ///
    /// The highest tile is not rolled back.
    pub fn rollback(&mut self) -> bool {
        match self.history.pop() {
            Some(Snapshot { grid, score }) => {
                self.grid = grid;
                self.score = score;

                debug!(score, remaining = self.history.len(), "rolled back");
                true
            }
            None => {
                trace!("nothing to roll back");
                false
            }
        }
    }

    pub fn can_move(&self) -> bool {
        logic::can_move(&self.grid)
    }
}

impl<R> Board<R> {
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn max_tile(&self) -> Tile {
        self.max_tile
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            score: self.score,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board<ChaCha8Rng> {
        Board::from_grid(text.parse().unwrap(), ChaCha8Rng::seed_from_u64(3))
    }

    #[test]
    fn new_board_has_two_tiles() {
        for seed in 0..50 {
            let board = Board::from_seed(seed);

            assert_eq!(board.grid().empty_count(), 14);
            assert_eq!(board.score(), 0);
            assert_eq!(board.max_tile(), Tile::TWO);
            assert_eq!(board.history_len(), 0);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = Board::from_seed(99);
        let mut b = Board::from_seed(99);

        for _ in 0..50 {
            assert_eq!(a.random_move(), b.random_move());
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn reset_clears_score_and_history() {
        let mut board = board("2 2 . . / . . . . / . . . . / . . . .");
        board.move_left();
        assert_eq!(board.score(), 4);

        board.reset();

        assert_eq!(board.score(), 0);
        assert_eq!(board.max_tile(), Tile::TWO);
        assert_eq!(board.history_len(), 0);
        assert_eq!(board.grid().empty_count(), 14);
        assert!(!board.rollback());
    }

    #[test]
    fn move_merges_scores_and_spawns() {
        let mut board = board("2 2 . . / . . . . / . . . . / . . . .");
        board.move_left();

        assert_eq!(board.grid().get(0, 0).value(), 4);
        assert_eq!(board.score(), 4);
        assert_eq!(board.max_tile(), Tile::FOUR);
        assert_eq!(board.grid().empty_count(), 14);
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn every_direction_snapshots_once() {
        let mut board = board("2 . . . / . . . . / . . . . / . . . 2");

        board.move_right();
        board.move_up();
        board.move_down();
        board.move_left();

        assert_eq!(board.history_len(), 4);
    }

    #[test]
    fn no_op_move_snapshots_without_spawning() {
        let mut board = board("2 4 . . / . . . . / . . . . / . . . .");
        let before = *board.grid();

        let slide = board.apply(Direction::Left);

        assert!(!slide.changed);
        assert_eq!(*board.grid(), before);
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn rollback_restores_grid_and_score() {
        let mut board = board("2 2 4 4 / . . . . / 8 . . 8 / . . . .");
        board.move_left();
        let after_first = board.snapshot();

        board.move_right();
        assert_ne!(board.snapshot(), after_first);

        assert!(board.rollback());
        assert_eq!(board.snapshot(), after_first);

        assert!(board.rollback());
        assert_eq!(board.score(), 0);
        assert_eq!(
            *board.grid(),
            "2 2 4 4 / . . . . / 8 . . 8 / . . . .".parse::<Grid>().unwrap()
        );

        assert!(!board.rollback());
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn rollback_keeps_max_tile() {
        let mut board = board("8 8 . . / . . . . / . . . . / . . . .");
        board.move_left();
        board.rollback();

        assert_eq!(board.max_tile().value(), 16);
        assert_eq!(board.grid().get(0, 0).value(), 8);
    }

    #[test]
    fn undo_limit_caps_history() {
        let mut board = Board::from_seed(5).with_undo_limit(1);

        for _ in 0..10 {
            board.random_move();
        }

        assert_eq!(board.history_len(), 1);
        assert!(board.rollback());
        assert!(!board.rollback());
    }

    #[test]
    fn from_grid_takes_highest_tile() {
        let board = board("2 . . . / . 256 . . / . . . . / . . . .");

        assert_eq!(board.max_tile().value(), 256);
        assert_eq!(board.score(), 0);
    }
}
