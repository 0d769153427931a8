//! Abstract 2D drawing surface.
//!
//! The renderer only needs three primitives: a filled rectangle, a filled
//! circle and a circle filled with a two-circle radial gradient.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use helix_core::color::Rgba;

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            min: DVec2::ZERO,
            size: DVec2::new(width, height),
        }
    }
}

/// A colour at a normalised offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient between an inner and an outer circle, filling the outer
/// circle. Stops must be sorted by offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub inner_center: DVec2,
    pub inner_radius: f64,
    pub outer_center: DVec2,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Concentric gradient starting at a single point.
    pub fn centered(center: DVec2, radius: f64, stops: Vec<ColorStop>) -> Self {
        Self {
            inner_center: center,
            inner_radius: 0.0,
            outer_center: center,
            outer_radius: radius,
            stops,
        }
    }

    /// Colour at parameter `s ∈ [0, 1]`; clamps to the first and last stop.
    pub fn color_at(&self, s: f32) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::TRANSPARENT;
        };
        if s <= first.offset {
            return first.color;
        }
        if s >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if s <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (s - a.offset) / span);
            }
        }
        last.color
    }

    /// Centre and radius of the interpolated circle at parameter `s`.
    pub fn circle_at(&self, s: f64) -> (DVec2, f64) {
        (
            self.inner_center.lerp(self.outer_center, s),
            self.inner_radius + (self.outer_radius - self.inner_radius) * s,
        )
    }
}

/// Drawing primitives the renderer paints with.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient);
}
