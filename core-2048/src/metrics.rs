use crate::{Row, Tile};

pub fn row_empty_count(row: &Row) -> u32 {
    row.iter().filter(|tile| tile.is_empty()).count() as u32
}

pub fn row_sum(row: &Row) -> u32 {
    row.iter().map(|tile| tile.value()).sum()
}

pub fn row_max(row: &Row) -> Tile {
    row.iter().copied().max().unwrap_or_default()
}

/// Whether two neighbouring cells of the row hold the same value.
///
/// Empty neighbours count too, a full grid never reaches that case.
pub fn row_has_pair(row: &Row) -> bool {
    row.windows(2).any(|pair| pair[0] == pair[1])
}

/// Whether the cells at the same position in two stacked rows hold the same value.
pub fn rows_have_pair(upper: &Row, lower: &Row) -> bool {
    upper.iter().zip(lower).any(|(a, b)| a == b)
}
