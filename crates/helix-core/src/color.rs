//! Structured colour values and the pink→blue ramp.

use serde::{Deserialize, Serialize};

use crate::constants::{BLUE, PINK};

/// Opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGB colour with a straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `brightness`, rounding and clamping to 255.
    pub fn scaled(self, brightness: f64) -> Self {
        let scale = |c: u8| (c as f64 * brightness).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Attach an alpha value (clamped to `[0, 1]`).
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Linear interpolation of all four channels.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Pink→blue ramp used for spheres and stars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
    /// Interpolate the blue channel as well. When false the blue channel is
    /// pinned to the pink endpoint, matching the scene's established look.
    pub corrected_blue_channel: bool,
}

impl ColorRamp {
    pub fn new(corrected_blue_channel: bool) -> Self {
        Self {
            corrected_blue_channel,
        }
    }

    /// Colour at `progress ∈ [0, 1]`.
    pub fn at(&self, progress: f64) -> Rgb {
        let t = progress.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
        let b = if self.corrected_blue_channel {
            mix(PINK.b, BLUE.b)
        } else {
            // blue.b - blue.b: the channel never leaves pink.b
            mix(PINK.b, PINK.b)
        };
        Rgb::new(mix(PINK.r, BLUE.r), mix(PINK.g, BLUE.g), b)
    }
}
