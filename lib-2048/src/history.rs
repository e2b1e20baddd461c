use std::collections::VecDeque;

use core_2048::Grid;

/// A saved grid and score, taken before a move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u32,
}

/// Undo stack of snapshots, optionally capped. When full, the oldest snapshot is dropped.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    snapshots: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        match self.limit {
            Some(0) => return,
            Some(limit) if self.snapshots.len() >= limit => {
                self.snapshots.pop_front();
            }
            _ => (),
        }

        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
