//! Board item store: the ordered collection of placed items for the
//! active concept session.

use crate::undo::UndoStack;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for board items.
pub type ItemId = Uuid;

/// Lower bound of the default placement window, in surface pixels.
pub const PLACEMENT_MIN: f64 = 150.0;
/// Upper bound of the default placement window, in surface pixels.
pub const PLACEMENT_MAX: f64 = 350.0;

/// What a board item renders as.
///
/// Purely descriptive: the kind only drives the default render size,
/// never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Emoji,
    Sticker,
    Shape,
}

impl ItemKind {
    /// Default render size in pixels.
    pub fn base_size(&self) -> f64 {
        match self {
            ItemKind::Text => 32.0,
            ItemKind::Emoji => 48.0,
            ItemKind::Sticker => 64.0,
            ItemKind::Shape => 56.0,
        }
    }
}

/// A placed glyph, letter, digit, or sticker symbol on the lesson board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: ItemId,
    /// Text payload, not a file reference.
    pub content: String,
    pub kind: ItemKind,
    /// Position in surface-local pixels, mutated by dragging.
    pub x: f64,
    pub y: f64,
    /// Reserved transform field, persisted but not mutated by any
    /// current interaction.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Reserved transform field, persisted but not mutated by any
    /// current interaction.
    #[serde(default)]
    pub rotation: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl BoardItem {
    /// Create a new item with a fresh id at the given position.
    pub fn new(content: impl Into<String>, kind: ItemKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            kind,
            x: position.x,
            y: position.y,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pseudo-random position inside the default placement window, so quick
/// successive adds don't land exactly on top of each other.
/// Counter + hash approach (splitmix32-like) that works on all platforms.
fn scatter_position() -> Point {
    use std::sync::atomic::{AtomicU32, Ordering};

    static SCATTER_COUNTER: AtomicU32 = AtomicU32::new(1);

    fn mix(mut x: u32) -> u32 {
        x = x.wrapping_mul(0x9E3779B9);
        x ^= x >> 16;
        x = x.wrapping_mul(0x85EBCA6B);
        x ^= x >> 13;
        x = x.wrapping_mul(0xC2B2AE35);
        x ^= x >> 16;
        x
    }

    let counter = SCATTER_COUNTER.fetch_add(1, Ordering::Relaxed);
    let span = PLACEMENT_MAX - PLACEMENT_MIN;
    let fx = (mix(counter.wrapping_mul(2)) % 1000) as f64 / 999.0;
    let fy = (mix(counter.wrapping_mul(2).wrapping_add(1)) % 1000) as f64 / 999.0;
    Point::new(PLACEMENT_MIN + fx * span, PLACEMENT_MIN + fy * span)
}

/// The ordered item collection plus its undo history.
#[derive(Debug, Clone, Default)]
pub struct Board {
    items: Vec<BoardItem>,
    undo: UndoStack,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in placement order.
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items on the board.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record the current collection as an undo step (call before changes).
    pub fn push_undo(&mut self) {
        self.undo.push(self.items.clone());
    }

    /// Add an item, recording an undo step first.
    ///
    /// When `position` is omitted the item is scattered inside the default
    /// placement window.
    pub fn add(
        &mut self,
        content: impl Into<String>,
        kind: ItemKind,
        position: Option<Point>,
    ) -> ItemId {
        self.push_undo();
        let item = BoardItem::new(content, kind, position.unwrap_or_else(scatter_position));
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Move an item to a new position, mutating only x/y.
    ///
    /// Does not record an undo step: a drag gesture records exactly one
    /// step, on its first move (see [`crate::gesture::DragGesture`]).
    pub fn move_item(&mut self, id: ItemId, position: Point) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.x = position.x;
                item.y = position.y;
                true
            }
            None => false,
        }
    }

    /// Remove an item, recording an undo step first.
    pub fn remove(&mut self, id: ItemId) -> Option<BoardItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.push_undo();
        Some(self.items.remove(index))
    }

    /// Replace the whole collection without touching undo history.
    ///
    /// Used when restoring a saved board and by undo itself, so restores
    /// never pollute the history.
    pub fn replace_all(&mut self, items: Vec<BoardItem>) {
        self.items = items;
    }

    /// Empty the board, recording an undo step first.
    pub fn clear(&mut self) {
        self.push_undo();
        self.items.clear();
    }

    /// Revert to the most recent undo snapshot.
    /// Returns false (a no-op, not an error) when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(snapshot) => {
                self.items = snapshot;
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::MAX_UNDO_HISTORY;

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut board = Board::new();
        let a = board.add("A", ItemKind::Text, Some(Point::new(10.0, 10.0)));
        let b = board.add("B", ItemKind::Text, Some(Point::new(20.0, 20.0)));

        assert_ne!(a, b);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_add_without_position_uses_placement_window() {
        let mut board = Board::new();
        for _ in 0..50 {
            board.add("⭐", ItemKind::Sticker, None);
        }

        for item in board.items() {
            assert!(item.x >= PLACEMENT_MIN && item.x <= PLACEMENT_MAX);
            assert!(item.y >= PLACEMENT_MIN && item.y <= PLACEMENT_MAX);
        }
    }

    #[test]
    fn test_undo_restores_pre_add_state() {
        let mut board = Board::new();
        board.add("A", ItemKind::Text, None);
        let before = board.items().to_vec();
        board.add("B", ItemKind::Text, None);

        assert!(board.undo());
        assert_eq!(board.items(), before.as_slice());
    }

    #[test]
    fn test_undo_restores_removed_item() {
        let mut board = Board::new();
        let id = board.add("A", ItemKind::Emoji, Some(Point::new(5.0, 5.0)));
        let before = board.items().to_vec();

        assert!(board.remove(id).is_some());
        assert!(board.is_empty());

        assert!(board.undo());
        assert_eq!(board.items(), before.as_slice());
    }

    #[test]
    fn test_remove_unknown_id_leaves_history_alone() {
        let mut board = Board::new();
        board.add("A", ItemKind::Text, None);

        assert!(board.remove(Uuid::new_v4()).is_none());

        // The failed remove must not have pushed a step: one undo (from
        // the add) exhausts the history.
        assert!(board.undo());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_move_does_not_push_undo() {
        let mut board = Board::new();
        let id = board.add("A", ItemKind::Text, Some(Point::new(0.0, 0.0)));

        assert!(board.move_item(id, Point::new(100.0, 50.0)));
        let item = board.get(id).unwrap();
        assert!((item.x - 100.0).abs() < f64::EPSILON);
        assert!((item.y - 50.0).abs() < f64::EPSILON);

        // Only the add pushed a step, so one undo empties the board.
        assert!(board.undo());
        assert!(board.is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_replace_all_does_not_push_undo() {
        let mut board = Board::new();
        board.replace_all(vec![BoardItem::new("X", ItemKind::Shape, Point::ZERO)]);

        assert_eq!(board.len(), 1);
        assert!(!board.can_undo());
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut board = Board::new();
        board.add("A", ItemKind::Text, None);
        board.add("B", ItemKind::Text, None);
        let before = board.items().to_vec();

        board.clear();
        assert!(board.is_empty());

        assert!(board.undo());
        assert_eq!(board.items(), before.as_slice());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut board = Board::new();
        assert!(!board.undo());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_history_bounded_by_cap() {
        let mut board = Board::new();
        for i in 0..MAX_UNDO_HISTORY + 5 {
            board.add(format!("{i}"), ItemKind::Text, None);
        }

        let mut undos = 0;
        while board.undo() {
            undos += 1;
        }
        assert_eq!(undos, MAX_UNDO_HISTORY);
    }

    #[test]
    fn test_base_sizes_scale_up_by_kind() {
        // Text glyphs render smallest, stickers largest.
        assert!(ItemKind::Text.base_size() < ItemKind::Emoji.base_size());
        assert!(ItemKind::Emoji.base_size() < ItemKind::Sticker.base_size());
        assert!(ItemKind::Shape.base_size() < ItemKind::Sticker.base_size());
    }

    #[test]
    fn test_scale_and_rotation_defaults() {
        let item = BoardItem::new("A", ItemKind::Text, Point::ZERO);
        assert!((item.scale - 1.0).abs() < f64::EPSILON);
        assert!(item.rotation.abs() < f64::EPSILON);
    }
}
