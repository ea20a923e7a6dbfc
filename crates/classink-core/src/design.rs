//! Per-subject classroom configuration and whiteboard history.

use crate::surface::Rgba8;
use crate::whiteboard::{Whiteboard, WhiteboardId};
use serde::{Deserialize, Serialize};

/// Poster/sticker slots per classroom.
pub const MAX_STICKERS: usize = 12;
/// Shelf-object slots per classroom.
pub const MAX_SHELF_OBJECTS: usize = 8;

/// Visual/audio configuration plus whiteboard history for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomDesign {
    pub wall_color: Rgba8,
    pub floor_color: Rgba8,
    /// Poster/sticker symbols on the walls, at most [`MAX_STICKERS`].
    pub stickers: Vec<String>,
    /// Objects on the shelf, at most [`MAX_SHELF_OBJECTS`].
    pub shelf_objects: Vec<String>,
    pub mascot: Option<String>,
    pub ambient_music: Option<String>,
    /// Saved board history, append-only and uncapped (see DESIGN.md).
    pub whiteboards: Vec<Whiteboard>,
}

impl Default for ClassroomDesign {
    fn default() -> Self {
        Self {
            wall_color: Rgba8::new(236, 231, 222, 255),
            floor_color: Rgba8::new(181, 136, 99, 255),
            stickers: Vec::new(),
            shelf_objects: Vec::new(),
            mascot: None,
            ambient_music: None,
            whiteboards: Vec::new(),
        }
    }
}

impl ClassroomDesign {
    /// Create a classroom with the default look and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wall sticker. Returns false when all slots are taken.
    pub fn add_sticker(&mut self, content: impl Into<String>) -> bool {
        if self.stickers.len() >= MAX_STICKERS {
            return false;
        }
        self.stickers.push(content.into());
        true
    }

    /// Add a shelf object. Returns false when the shelf is full.
    pub fn add_shelf_object(&mut self, content: impl Into<String>) -> bool {
        if self.shelf_objects.len() >= MAX_SHELF_OBJECTS {
            return false;
        }
        self.shelf_objects.push(content.into());
        true
    }

    /// Remove a sticker by slot index.
    pub fn remove_sticker(&mut self, index: usize) -> Option<String> {
        (index < self.stickers.len()).then(|| self.stickers.remove(index))
    }

    /// Remove a shelf object by slot index.
    pub fn remove_shelf_object(&mut self, index: usize) -> Option<String> {
        (index < self.shelf_objects.len()).then(|| self.shelf_objects.remove(index))
    }

    /// Append a saved board to the history. The only way history grows.
    pub fn push_whiteboard(&mut self, board: Whiteboard) -> WhiteboardId {
        let id = board.id;
        self.whiteboards.push(board);
        id
    }

    /// Look up a saved board by id.
    pub fn whiteboard(&self, id: WhiteboardId) -> Option<&Whiteboard> {
        self.whiteboards.iter().find(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whiteboard::BackgroundStyle;

    #[test]
    fn test_sticker_slots_bounded() {
        let mut design = ClassroomDesign::new();
        for i in 0..MAX_STICKERS {
            assert!(design.add_sticker(format!("s{i}")));
        }
        assert!(!design.add_sticker("overflow"));
        assert_eq!(design.stickers.len(), MAX_STICKERS);
    }

    #[test]
    fn test_shelf_slots_bounded() {
        let mut design = ClassroomDesign::new();
        for i in 0..MAX_SHELF_OBJECTS {
            assert!(design.add_shelf_object(format!("o{i}")));
        }
        assert!(!design.add_shelf_object("overflow"));
    }

    #[test]
    fn test_removing_frees_a_slot() {
        let mut design = ClassroomDesign::new();
        for i in 0..MAX_STICKERS {
            design.add_sticker(format!("s{i}"));
        }
        assert_eq!(design.remove_sticker(0).as_deref(), Some("s0"));
        assert!(design.add_sticker("again"));
    }

    #[test]
    fn test_history_append_only_growth() {
        let mut design = ClassroomDesign::new();
        let first = Whiteboard::new("one", Vec::new(), BackgroundStyle::Plain, String::new());
        let first_id = design.push_whiteboard(first.clone());

        let second = Whiteboard::new("two", Vec::new(), BackgroundStyle::Grid, String::new());
        design.push_whiteboard(second);

        assert_eq!(design.whiteboards.len(), 2);
        // Earlier entries are untouched by later saves.
        assert_eq!(design.whiteboard(first_id), Some(&first));
    }
}
