//! Saved lesson-board snapshots.

use crate::board::BoardItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for saved whiteboards.
pub type WhiteboardId = Uuid;

/// Background style tag for the lesson board.
///
/// A styling layer below the raster; never part of the raster itself, so
/// erasing strokes cannot remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Plain,
    Lined,
    Grid,
}

/// An immutable named snapshot of items + raster + background style.
///
/// History is append-only: saved boards are never edited in place or
/// removed from within the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whiteboard {
    pub id: WhiteboardId,
    /// User-supplied name.
    pub name: String,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
    /// Deep copy of the board item collection at save time, order kept.
    pub items: Vec<BoardItem>,
    pub bg: BackgroundStyle,
    /// Opaque encoded raster of the drawing surface at save time.
    pub drawing_data: String,
}

impl Whiteboard {
    /// Snapshot the given state under a fresh id, stamped now.
    pub fn new(
        name: impl Into<String>,
        items: Vec<BoardItem>,
        bg: BackgroundStyle,
        drawing_data: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            timestamp: Utc::now(),
            items,
            bg,
            drawing_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ItemKind;
    use kurbo::Point;

    #[test]
    fn test_snapshot_copies_items() {
        let items = vec![BoardItem::new("7", ItemKind::Text, Point::new(1.0, 2.0))];
        let board = Whiteboard::new("Counting", items.clone(), BackgroundStyle::Grid, String::new());

        assert_eq!(board.items, items);
        assert_eq!(board.bg, BackgroundStyle::Grid);
        assert_eq!(board.name, "Counting");
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Whiteboard::new(
            "Letters",
            vec![BoardItem::new("A", ItemKind::Text, Point::new(10.0, 20.0))],
            BackgroundStyle::Lined,
            "AAAA".to_string(),
        );

        let json = serde_json::to_string(&board).unwrap();
        let back: Whiteboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
