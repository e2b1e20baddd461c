use std::{fmt, str::FromStr};

use crate::{Grid, GridError, Tile, SIZE};

const CELL_WIDTH: usize = 6;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }

            for tile in row {
                write!(f, "{tile:>width$}", width = CELL_WIDTH)?;
            }
        }

        Ok(())
    }
}

/// Parses rows separated by newlines or `/`, with whitespace between cells.
/// Empty cells may be written as `.` or `0`.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != SIZE {
            return Err(GridError::RowCount {
                expected: SIZE,
                found: lines.len(),
            });
        }

        let mut grid = Grid::empty();

        for (i, line) in lines.into_iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();

            if cells.len() != SIZE {
                return Err(GridError::ColumnCount {
                    row: i,
                    expected: SIZE,
                    found: cells.len(),
                });
            }

            for (j, text) in cells.into_iter().enumerate() {
                let tile = match text {
                    "." => Tile::EMPTY,
                    _ => {
                        let value = text.parse().map_err(|_| GridError::ParseTile {
                            row: i,
                            text: text.to_owned(),
                        })?;

                        Tile::new(value)?
                    }
                };

                grid.set(i, j, tile);
            }
        }

        Ok(grid)
    }
}
