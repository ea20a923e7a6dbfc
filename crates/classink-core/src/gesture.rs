//! Drag gesture lifecycle for board items.

use crate::board::{Board, ItemId};
use kurbo::Point;

/// A live drag of a single board item.
///
/// Owns the gesture's starting state: created on pointer-down over an
/// item, dropped unconditionally when the gesture ends, however it ends
/// (pointer-up, or the pointer leaving the window mid-drag). The first
/// move of the gesture records exactly one undo step; later moves in the
/// same gesture do not, so undo steps back one gesture, not one pixel.
#[derive(Debug, Clone)]
pub struct DragGesture {
    item_id: ItemId,
    /// Pointer position at gesture begin, surface-local.
    start_pointer: Point,
    /// Item position at gesture begin.
    start_item: Point,
    undo_recorded: bool,
}

impl DragGesture {
    /// Begin a drag. Returns None when the item does not exist.
    pub fn begin(board: &Board, item_id: ItemId, pointer: Point) -> Option<Self> {
        let item = board.get(item_id)?;
        Some(Self {
            item_id,
            start_pointer: pointer,
            start_item: item.position(),
            undo_recorded: false,
        })
    }

    /// The item being dragged.
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Move the dragged item to track the pointer.
    ///
    /// The pre-drag collection is recorded once, before the gesture's
    /// first mutation. Between gesture begin and the first move nothing
    /// else mutates the board, so pushing at first-move time captures the
    /// pre-drag state exactly.
    pub fn drag_to(&mut self, board: &mut Board, pointer: Point) -> bool {
        if !self.undo_recorded {
            board.push_undo();
            self.undo_recorded = true;
        }
        let delta = pointer - self.start_pointer;
        board.move_item(self.item_id, self.start_item + delta)
    }
}
