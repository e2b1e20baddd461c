use rand::Rng;

use core_2048::{metrics, row, Grid, Slide, Tile};

use crate::direction::Direction;

const MOVE_FUNCTIONS: [fn(&mut Grid) -> Slide; 4] = [move_left, move_right, move_up, move_down];

/// Places a tile on a uniformly chosen empty cell: a 2 nine times in ten, otherwise a 4.
///
/// Returns the position and tile placed, or `None` when the grid is full.
pub fn spawn_tile(rng: &mut impl Rng, grid: &mut Grid) -> Option<(usize, usize, Tile)> {
    let slot_count = grid.empty_count();

    if slot_count > 0 {
        let rand = rng.gen_range(0..(slot_count * 10));

        let slot_idx = rand / 10;
        let tile = if rand % 10 == 0 { Tile::FOUR } else { Tile::TWO };

        let (i, j) = grid.empty_cells().nth(slot_idx as usize)?;
        grid.set(i, j, tile);

        Some((i, j, tile))
    } else {
        None
    }
}

/// Whether any move can change the grid: there is an empty cell, or two neighbouring
/// cells in a row or column hold the same value.
pub fn can_move(grid: &Grid) -> bool {
    let rows = grid.rows();

    grid.empty_count() > 0
        || rows.iter().any(metrics::row_has_pair)
        || rows
            .windows(2)
            .any(|pair| metrics::rows_have_pair(&pair[0], &pair[1]))
}

fn move_left(grid: &mut Grid) -> Slide {
    grid.rows_mut()
        .iter_mut()
        .map(row::slide_left)
        .fold(Slide::default(), Slide::combine)
}

fn move_right(grid: &mut Grid) -> Slide {
    grid.rotate_by(2);

    let slide = move_left(grid);

    grid.rotate_by(2);
    slide
}

fn move_up(grid: &mut Grid) -> Slide {
    grid.rotate_by(1);

    let slide = move_left(grid);

    grid.rotate_by(3);
    slide
}

fn move_down(grid: &mut Grid) -> Slide {
    grid.rotate_by(3);

    let slide = move_left(grid);

    grid.rotate_by(1);
    slide
}

/// Slides every tile of `grid` towards `direction`. Never spawns a tile.
pub fn do_move(grid: &mut Grid, direction: Direction) -> Slide {
    MOVE_FUNCTIONS[direction as usize](grid)
}

/// Returns the grid after moving towards `direction`, or `None` if the move changes nothing.
pub fn try_move(grid: &Grid, direction: Direction) -> Option<(Grid, Slide)> {
    let mut new_grid = *grid;
    let slide = do_move(&mut new_grid, direction);

    slide.changed.then_some((new_grid, slide))
}

/// `try_move` for every direction, indexed by `Direction as usize`.
pub fn try_all_moves(grid: &Grid) -> [Option<(Grid, Slide)>; 4] {
    Direction::ALL.map(|direction| try_move(grid, direction))
}
