//! Recording surface. Captures draw calls as data instead of pixels.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use helix_core::color::Rgba;

use crate::surface::{RadialGradient, Rect, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawOp {
    FillRect { rect: Rect, color: Rgba },
    FillCircle { center: DVec2, radius: f64, color: Rgba },
    FillRadialGradient { gradient: RadialGradient },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        self.ops.push(DrawOp::FillRadialGradient {
            gradient: gradient.clone(),
        });
    }
}
