//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{FRAME_MS, REST_THRESHOLD_MS};

/// Drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space centre; sphere positions are relative to this point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Frame timing. `now_ms` is a monotonic timestamp supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Frames simulated so far.
    pub frame: u64,
    /// Timestamp of the most recent frame (ms).
    pub now_ms: f64,
}

impl FrameClock {
    /// Record a frame at the given timestamp.
    pub fn advance_to(&mut self, now_ms: f64) {
        self.frame += 1;
        self.now_ms = now_ms;
    }

    /// Timestamp one nominal frame after the current one.
    pub fn next_fixed_step(&self) -> f64 {
        self.now_ms + FRAME_MS
    }
}

/// Last observed pointer position and when it last moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Screen coordinates. `None` until the first movement is observed.
    pub position: Option<DVec2>,
    /// Timestamp of the last movement (ms). Scene start until then.
    pub last_move_ms: f64,
}

impl PointerState {
    pub fn moved(&mut self, position: DVec2, at_ms: f64) {
        self.position = Some(position);
        self.last_move_ms = at_ms;
    }

    /// Milliseconds since the pointer last moved.
    pub fn idle_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.last_move_ms
    }

    pub fn is_resting(&self, now_ms: f64) -> bool {
        self.idle_ms(now_ms) > REST_THRESHOLD_MS
    }
}
