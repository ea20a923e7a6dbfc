//! Tool selection and stroke sessions for the drawing surface.

use crate::surface::{Blend, RasterSurface, Rgba8};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Fixed marker ink color.
pub const MARKER_COLOR: Rgba8 = Rgba8::new(33, 33, 33, 255);
/// Highlighter ink: wide and translucent, blends over what is below.
pub const HIGHLIGHTER_COLOR: Rgba8 = Rgba8::new(255, 235, 59, 112);

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// No drawing; the pointer manipulates board items instead.
    #[default]
    Select,
    Marker,
    Highlighter,
    Eraser,
}

/// Stroke parameters for a drawing tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePen {
    pub width: f64,
    pub color: Rgba8,
    pub blend: Blend,
}

impl ToolKind {
    /// Stroke parameters, or None for non-drawing tools.
    pub fn pen(&self) -> Option<StrokePen> {
        match self {
            ToolKind::Select => None,
            ToolKind::Marker => Some(StrokePen {
                width: 4.0,
                color: MARKER_COLOR,
                blend: Blend::SourceOver,
            }),
            ToolKind::Highlighter => Some(StrokePen {
                width: 14.0,
                color: HIGHLIGHTER_COLOR,
                blend: Blend::SourceOver,
            }),
            ToolKind::Eraser => Some(StrokePen {
                width: 20.0,
                color: Rgba8::new(0, 0, 0, 255),
                blend: Blend::DestinationOut,
            }),
        }
    }
}

/// Owns the active tool and the in-progress stroke session.
///
/// Every `move_to` paints its segment into the surface before returning,
/// so each pointer event is visually reflected before the next one is
/// handled.
#[derive(Debug, Clone, Default)]
pub struct StrokeEngine {
    active: ToolKind,
    last_point: Option<Point>,
}

impl StrokeEngine {
    /// Create a new engine with the select tool active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected tool.
    pub fn active_tool(&self) -> ToolKind {
        self.active
    }

    /// Select a tool. Cancels any in-progress stroke.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active = tool;
        self.last_point = None;
    }

    /// Whether a stroke session is in progress.
    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    /// Pointer-down on the surface. A click without movement paints a dot.
    pub fn begin(&mut self, surface: &mut RasterSurface, point: Point) {
        let Some(pen) = self.active.pen() else {
            return;
        };
        surface.paint_segment(point, point, pen.width, pen.color, pen.blend);
        self.last_point = Some(point);
    }

    /// Pointer-move while the button is held; extends the path.
    pub fn move_to(&mut self, surface: &mut RasterSurface, point: Point) {
        let Some(pen) = self.active.pen() else {
            return;
        };
        let Some(last) = self.last_point else {
            return;
        };
        surface.paint_segment(last, point, pen.width, pen.color, pen.blend);
        self.last_point = Some(point);
    }

    /// Pointer-up, or the pointer leaving the surface while held.
    /// Unconditional teardown of the stroke session.
    pub fn end(&mut self) {
        self.last_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tool_never_draws() {
        let mut engine = StrokeEngine::new();
        let mut surface = RasterSurface::new(32, 32);

        engine.begin(&mut surface, Point::new(16.0, 16.0));
        engine.move_to(&mut surface, Point::new(20.0, 20.0));
        engine.end();

        assert!(surface.is_blank());
        assert!(!engine.is_drawing());
    }

    #[test]
    fn test_marker_stroke_session() {
        let mut engine = StrokeEngine::new();
        engine.set_tool(ToolKind::Marker);
        let mut surface = RasterSurface::new(64, 64);

        engine.begin(&mut surface, Point::new(10.0, 10.0));
        assert!(engine.is_drawing());

        engine.move_to(&mut surface, Point::new(40.0, 10.0));
        // The segment is already composited, mid-gesture.
        assert_eq!(surface.pixel(25, 10).a, 255);

        engine.end();
        assert!(!engine.is_drawing());
    }

    #[test]
    fn test_move_without_begin_is_noop() {
        let mut engine = StrokeEngine::new();
        engine.set_tool(ToolKind::Marker);
        let mut surface = RasterSurface::new(32, 32);

        engine.move_to(&mut surface, Point::new(16.0, 16.0));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_switching_tools_cancels_session() {
        let mut engine = StrokeEngine::new();
        engine.set_tool(ToolKind::Marker);
        let mut surface = RasterSurface::new(32, 32);

        engine.begin(&mut surface, Point::new(5.0, 5.0));
        engine.set_tool(ToolKind::Eraser);
        assert!(!engine.is_drawing());
    }

    #[test]
    fn test_eraser_over_marker() {
        let mut engine = StrokeEngine::new();
        let mut surface = RasterSurface::new(64, 64);

        engine.set_tool(ToolKind::Marker);
        engine.begin(&mut surface, Point::new(5.0, 32.0));
        engine.move_to(&mut surface, Point::new(60.0, 32.0));
        engine.end();

        engine.set_tool(ToolKind::Eraser);
        engine.begin(&mut surface, Point::new(32.0, 32.0));
        engine.end();

        assert_eq!(surface.pixel(32, 32).a, 0);
        assert_eq!(surface.pixel(8, 32).a, 255);
    }
}
