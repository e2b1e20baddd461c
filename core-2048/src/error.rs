use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid tile value {0}: must be 0 or a power of two from 2 to 131072")]
    InvalidTile(u32),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} tiles, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: cannot parse tile {text:?}")]
    ParseTile { row: usize, text: String },
}
