//! Frame loop: turns host events into scene commands and pulls frames.
//!
//! The host schedules frames; this type only supplies the monotonic clock
//! and forwards input. Everything runs on the UI thread.

use std::time::Instant;

use helix_core::commands::SceneCommand;
use helix_core::state::SceneSnapshot;
use helix_core::types::Canvas;
use helix_sim::SceneEngine;

pub struct FrameLoop {
    engine: SceneEngine,
    started: Instant,
    /// Last canvas size reported to the engine.
    canvas: Canvas,
    stopped: bool,
}

impl FrameLoop {
    pub fn new(engine: SceneEngine) -> Self {
        let canvas = engine.canvas();
        Self {
            engine,
            started: Instant::now(),
            canvas,
            stopped: false,
        }
    }

    /// Milliseconds since the loop started.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Record a pointer movement now.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let at_ms = self.elapsed_ms();
        self.pointer_moved_at(x, y, at_ms);
    }

    pub fn pointer_moved_at(&mut self, x: f64, y: f64, at_ms: f64) {
        self.engine
            .queue_command(SceneCommand::PointerMoved { x, y, at_ms });
    }

    /// Report the current surface size; queues a resize only on change.
    pub fn observe_size(&mut self, width: f64, height: f64) {
        let canvas = Canvas::new(width, height);
        if canvas == self.canvas || !canvas.is_valid() {
            return;
        }
        tracing::debug!(width, height, "surface size changed");
        self.canvas = canvas;
        self.engine
            .queue_command(SceneCommand::Resize { width, height });
    }

    /// Host teardown. The next frame request returns nothing.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.engine.queue_command(SceneCommand::Stop);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance the scene to the current time.
    pub fn next_frame(&mut self) -> Option<SceneSnapshot> {
        let now_ms = self.elapsed_ms();
        self.frame_at(now_ms)
    }

    pub fn frame_at(&mut self, now_ms: f64) -> Option<SceneSnapshot> {
        self.engine.tick(now_ms)
    }

    pub fn engine(&self) -> &SceneEngine {
        &self.engine
    }
}
