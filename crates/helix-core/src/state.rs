//! Scene snapshot: the render-ready view of the scene after a tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::enums::SphereKind;
use crate::types::{Canvas, FrameClock, PointerState};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub clock: FrameClock,
    pub canvas: Canvas,
    pub rotation: f64,
    pub pointer: PointerState,
    pub stars: Vec<StarView>,
    /// In index order; the renderer performs the depth sort.
    pub spheres: Vec<SphereView>,
}

/// A star ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarView {
    /// Screen position.
    pub position: DVec2,
    pub size: f64,
    pub color: Rgb,
    /// Twinkle-modulated opacity for this frame.
    pub opacity: f64,
}

/// A sphere ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereView {
    pub index: usize,
    pub kind: SphereKind,
    /// Position relative to the canvas centre.
    pub local: DVec2,
    /// Anchor relative to the canvas centre.
    pub anchor: DVec2,
    pub radius: f64,
    pub color: Rgb,
    pub brightness: f64,
}

impl SphereView {
    /// Screen position for a canvas.
    pub fn screen_position(&self, canvas: &Canvas) -> DVec2 {
        canvas.center() + self.local
    }
}

impl SceneSnapshot {
    pub fn helix_spheres(&self) -> impl Iterator<Item = &SphereView> {
        self.spheres.iter().filter(|s| s.kind.is_helix())
    }

    pub fn scatter_spheres(&self) -> impl Iterator<Item = &SphereView> {
        self.spheres.iter().filter(|s| !s.kind.is_helix())
    }
}
