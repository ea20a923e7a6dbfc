//! Bounded undo history for the board item store.

use crate::board::BoardItem;

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 20;

/// Bounded LIFO of prior item-collection snapshots.
///
/// One-directional: popping is destructive and there is no redo. Pushing
/// past the cap drops the oldest entry instead of failing.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<Vec<BoardItem>>,
}

impl UndoStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, evicting the oldest entry beyond the cap.
    pub fn push(&mut self, snapshot: Vec<BoardItem>) {
        self.entries.push(snapshot);
        if self.entries.len() > MAX_UNDO_HISTORY {
            self.entries.remove(0);
        }
    }

    /// Remove and return the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Vec<BoardItem>> {
        self.entries.pop()
    }

    /// Whether there is anything to undo (drives UI enablement).
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
