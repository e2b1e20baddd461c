mod error;
pub mod metrics;
pub mod row;
mod text;
mod tile;

pub use error::GridError;
pub use row::{Row, Slide};
pub use tile::Tile;

/// Width and height of the grid.
pub const SIZE: usize = 4;

/// A square grid of tiles, indexed `[row][column]` from the top left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid([Row; SIZE]);

impl Grid {
    pub const fn empty() -> Self {
        Self([[Tile::EMPTY; SIZE]; SIZE])
    }

    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::empty();

        for (cells, values) in grid.0.iter_mut().zip(rows) {
            for (cell, value) in cells.iter_mut().zip(values) {
                *cell = Tile::new(value)?;
            }
        }

        Ok(grid)
    }

    pub fn to_values(&self) -> [[u32; SIZE]; SIZE] {
        self.0.map(|row| row.map(Tile::value))
    }

    pub const fn rows(&self) -> &[Row; SIZE] {
        &self.0
    }

    pub fn rows_mut(&mut self) -> &mut [Row; SIZE] {
        &mut self.0
    }

    pub const fn get(&self, row: usize, column: usize) -> Tile {
        self.0[row][column]
    }

    pub fn set(&mut self, row: usize, column: usize, tile: Tile) {
        self.0[row][column] = tile;
    }

    /// Positions of the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, tile)| tile.is_empty())
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn empty_count(&self) -> u32 {
        self.0.iter().map(metrics::row_empty_count).sum()
    }

    pub fn tile_sum(&self) -> u32 {
        self.0.iter().map(metrics::row_sum).sum()
    }

    pub fn max_tile(&self) -> Tile {
        self.0.iter().map(metrics::row_max).max().unwrap_or_default()
    }

    /// Turns the grid a quarter turn anticlockwise in place: row `i` becomes what
    /// was column `SIZE - 1 - i`, read top to bottom.
    pub fn rotate(&mut self) {
        const LAST: usize = SIZE - 1;

        let cells = &mut self.0;

        for i in 0..SIZE / 2 {
            for j in i..LAST - i {
                let tmp = cells[i][j];
                cells[i][j] = cells[j][LAST - i];
                cells[j][LAST - i] = cells[LAST - i][LAST - j];
                cells[LAST - i][LAST - j] = cells[LAST - j][i];
                cells[LAST - j][i] = tmp;
            }
        }
    }

    pub fn rotate_by(&mut self, turns: u32) {
        for _ in 0..turns % 4 {
            self.rotate();
        }
    }
}
