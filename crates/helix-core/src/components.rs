//! ECS components for scene entities.
//!
//! Spheres carry `Position`, `Anchor`, `SphereBody`, `Brightness` and
//! `SphereSlot`. Stars carry `Position`, `StarBody`, `Twinkle` and `Drift`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::enums::SphereKind;

/// Current position. Sphere positions are relative to the canvas centre;
/// star positions are in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Reference position a sphere eases back to (`originalX/originalY`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor(pub DVec2);

/// Fixed visual properties of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereBody {
    pub radius: f64,
    pub color: Rgb,
    /// Phase along the helix parametrisation (radians).
    pub angle: f64,
}

/// Per-frame brightness multiplier; doubles as the depth sort key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brightness(pub f64);

impl Default for Brightness {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Stable index and role of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereSlot {
    pub index: usize,
    pub kind: SphereKind,
}

/// Fixed visual properties of a star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarBody {
    pub size: f64,
    /// Base opacity before twinkle modulation.
    pub opacity: f64,
    pub color: Rgb,
}

/// Sinusoidal opacity modulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twinkle {
    pub speed: f64,
    pub offset: f64,
}

impl Twinkle {
    /// Twinkle phase value in `[-1, 1]` at `now_ms`.
    pub fn value(&self, now_ms: f64) -> f64 {
        (now_ms * self.speed + self.offset).sin()
    }
}

/// Slow positional wander.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drift {
    pub speed_x: f64,
    pub speed_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}
