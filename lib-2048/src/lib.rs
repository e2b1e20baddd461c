pub use core_2048::*;

pub mod ai;
pub mod board;
pub mod logic;

mod direction;
mod history;

pub use board::Board;
pub use direction::Direction;
pub use history::Snapshot;
