//! ClassInk Core Library
//!
//! Platform-agnostic state and logic for the ClassInk lesson board:
//! board items, undo, the drawing surface, classroom designs, and
//! profile persistence.

pub mod board;
pub mod design;
pub mod gesture;
pub mod input;
pub mod profile;
pub mod session;
pub mod storage;
pub mod suggest;
pub mod surface;
pub mod tools;
pub mod undo;
pub mod whiteboard;

#[cfg(test)]
pub(crate) mod test_util;

pub use board::{Board, BoardItem, ItemId, ItemKind};
pub use design::{ClassroomDesign, MAX_SHELF_OBJECTS, MAX_STICKERS};
pub use gesture::DragGesture;
pub use input::{PointerSource, SurfaceFrame};
pub use profile::{CustomSubject, UserProfile, BUILT_IN_SUBJECTS};
pub use session::{LessonSession, SessionError};
pub use suggest::{
    CannedSuggestions, SuggestionProvider, SuggestionRequest, suggest_or_fallback,
    FALLBACK_SUGGESTION,
};
pub use surface::{RasterSurface, Rgba8};
pub use tools::{StrokeEngine, ToolKind};
pub use undo::{UndoStack, MAX_UNDO_HISTORY};
pub use whiteboard::{BackgroundStyle, Whiteboard, WhiteboardId};
