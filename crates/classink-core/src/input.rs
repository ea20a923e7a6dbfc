//! Pointer input mapping from client space to surface-local space.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where a pointer event came from.
///
/// Mouse and touch both carry client coordinates and map to surface-local
/// coordinates identically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse { x: f64, y: f64 },
    Touch { x: f64, y: f64 },
}

impl PointerSource {
    /// Client-space position of the event.
    pub fn client_position(&self) -> Point {
        match *self {
            PointerSource::Mouse { x, y } | PointerSource::Touch { x, y } => Point::new(x, y),
        }
    }
}

/// The surface's placement in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceFrame {
    /// Client-space position of the surface's top-left corner.
    pub origin: Point,
}

impl SurfaceFrame {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Translate client coordinates to surface-local coordinates.
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.origin.x, client.y - self.origin.y)
    }

    /// Surface-local position of a pointer event.
    pub fn local_position(&self, event: PointerSource) -> Point {
        self.to_local(event.client_position())
    }
}
