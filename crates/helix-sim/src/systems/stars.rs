//! Starfield system: twinkle and float drift.

use hecs::World;

use helix_core::components::{Drift, Position, StarBody, Twinkle};
use helix_core::constants::{STAR_FLOAT_AMPLITUDE, STAR_TWINKLE_AMPLITUDE};

/// Apply float drift to every star. Positions are never clamped.
pub fn run(world: &mut World, now_ms: f64) {
    for (_entity, (pos, drift)) in world.query_mut::<(&mut Position, &Drift)>() {
        pos.0.x += (now_ms * drift.speed_x + drift.offset_x).sin() * STAR_FLOAT_AMPLITUDE;
        pos.0.y += (now_ms * drift.speed_y + drift.offset_y).sin() * STAR_FLOAT_AMPLITUDE;
    }
}

/// Twinkle-modulated opacity for display. Not stored.
pub fn display_opacity(body: &StarBody, twinkle: &Twinkle, now_ms: f64) -> f64 {
    body.opacity + twinkle.value(now_ms) * STAR_TWINKLE_AMPLITUDE
}
