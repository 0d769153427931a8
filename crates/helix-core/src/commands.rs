//! Host commands sent to the scene engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All inputs the host can deliver to the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Pointer moved to `(x, y)` in screen coordinates at `at_ms`.
    PointerMoved { x: f64, y: f64, at_ms: f64 },
    /// Viewport resized.
    Resize { width: f64, height: f64 },
    /// Host teardown. No further frames are produced.
    Stop,
}
