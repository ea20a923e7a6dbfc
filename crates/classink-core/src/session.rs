//! The live lesson session: commands over board + surface state.

use crate::board::{Board, ItemId, ItemKind};
use crate::gesture::DragGesture;
use crate::input::{PointerSource, SurfaceFrame};
use crate::profile::UserProfile;
use crate::surface::{RasterError, RasterSurface};
use crate::tools::{StrokeEngine, ToolKind};
use crate::whiteboard::{BackgroundStyle, Whiteboard, WhiteboardId};
use thiserror::Error;

/// Errors from session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("Subject is not active: {0}")]
    InactiveSubject(String),
}

/// Live state for presenting one concept: the item board, the drawing
/// surface, the active tool, and any in-flight drag gesture.
///
/// All mutation goes through these commands against explicitly passed-in
/// state; there is no ambient global. The owning profile is only touched
/// at save/restore time.
#[derive(Debug, Clone)]
pub struct LessonSession {
    subject: String,
    pub board: Board,
    pub surface: RasterSurface,
    pub background: BackgroundStyle,
    pub strokes: StrokeEngine,
    frame: SurfaceFrame,
    drag: Option<DragGesture>,
}

impl LessonSession {
    /// Start a session for a subject with a blank board and surface.
    pub fn new(subject: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            subject: subject.into(),
            board: Board::new(),
            surface: RasterSurface::new(width, height),
            background: BackgroundStyle::default(),
            strokes: StrokeEngine::new(),
            frame: SurfaceFrame::default(),
            drag: None,
        }
    }

    /// The subject this session presents.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Where the surface sits in client space (for pointer mapping).
    pub fn set_frame(&mut self, frame: SurfaceFrame) {
        self.frame = frame;
    }

    pub fn frame(&self) -> SurfaceFrame {
        self.frame
    }

    /// Add an item at a scattered default position (palette click-add).
    pub fn add_item(&mut self, content: impl Into<String>, kind: ItemKind) -> ItemId {
        self.board.add(content, kind, None)
    }

    /// Drop an item at a client-space position (drag from a palette).
    pub fn drop_item(
        &mut self,
        content: impl Into<String>,
        kind: ItemKind,
        event: PointerSource,
    ) -> ItemId {
        let local = self.frame.local_position(event);
        self.board.add(content, kind, Some(local))
    }

    /// Delete an item from the board.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.board.remove(id).is_some()
    }

    /// Begin dragging an item. Any previous gesture is torn down first.
    pub fn begin_drag(&mut self, id: ItemId, event: PointerSource) -> bool {
        self.drag = None;
        let pointer = self.frame.local_position(event);
        self.drag = DragGesture::begin(&self.board, id, pointer);
        self.drag.is_some()
    }

    /// Track the pointer during a drag. No-op without an active gesture.
    pub fn drag_to(&mut self, event: PointerSource) -> bool {
        let pointer = self.frame.local_position(event);
        match self.drag.as_mut() {
            Some(gesture) => gesture.drag_to(&mut self.board, pointer),
            None => false,
        }
    }

    /// End the gesture. Always tears it down, normal or abnormal end.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Whether a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Select the active tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.strokes.set_tool(tool);
    }

    /// Pointer-down on the surface. In select mode this draws nothing.
    pub fn pointer_down(&mut self, event: PointerSource) {
        let local = self.frame.local_position(event);
        self.strokes.begin(&mut self.surface, local);
    }

    /// Pointer-move with the button held; the segment is painted before
    /// this returns.
    pub fn pointer_move(&mut self, event: PointerSource) {
        let local = self.frame.local_position(event);
        self.strokes.move_to(&mut self.surface, local);
    }

    /// Pointer-up, or the pointer leaving the surface while held.
    pub fn pointer_up(&mut self) {
        self.strokes.end();
    }

    /// Undo the last structural board mutation. Strokes are not undoable.
    pub fn undo(&mut self) -> bool {
        self.board.undo()
    }

    pub fn can_undo(&self) -> bool {
        self.board.can_undo()
    }

    /// Wipe items and raster. One undo step is recorded for the items;
    /// confirming with the user happens in the caller's UI.
    pub fn clear_all(&mut self) {
        self.board.clear();
        self.surface.clear();
    }

    pub fn set_background(&mut self, bg: BackgroundStyle) {
        self.background = bg;
    }

    /// Snapshot the session into a named whiteboard appended to this
    /// subject's history.
    ///
    /// A blank name aborts silently (cancel semantics) and returns
    /// Ok(None). Saving into a subject the profile no longer lists as
    /// active is refused: the history would land outside the profile
    /// invariant and be swept away on the next subject change. The caller
    /// persists the whole profile afterwards; the in-memory update stands
    /// even if that write later fails.
    pub fn save_into(
        &self,
        name: &str,
        profile: &mut UserProfile,
    ) -> Result<Option<WhiteboardId>, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("save aborted: empty board name");
            return Ok(None);
        }
        let Some(design) = profile.design_mut(&self.subject) else {
            log::warn!("save refused: subject {} is not active", self.subject);
            return Err(SessionError::InactiveSubject(self.subject.clone()));
        };

        let board = Whiteboard::new(
            name,
            self.board.items().to_vec(),
            self.background,
            self.surface.encode()?,
        );
        let id = design.push_whiteboard(board);
        log::info!("saved whiteboard {} for subject {}", id, self.subject);
        Ok(Some(id))
    }

    /// Reset the session to a saved whiteboard: items (copied), background
    /// tag, and the raster where it still decodes.
    ///
    /// Leaves the undo stack alone: restoring is a session reset, not an
    /// undoable edit within the current session. Returns false when the
    /// id is unknown for this subject.
    pub fn restore_from(&mut self, profile: &UserProfile, id: WhiteboardId) -> bool {
        let Some(saved) = profile
            .design(&self.subject)
            .and_then(|design| design.whiteboard(id))
        else {
            return false;
        };

        self.board.replace_all(saved.items.clone());
        self.background = saved.bg;
        match RasterSurface::decode(&saved.drawing_data) {
            Ok(surface) => self.surface = surface,
            Err(e) => {
                log::warn!("could not redraw saved raster: {e}");
                self.surface.clear();
            }
        }
        true
    }
}
