//! Scatter system: slow drift and independent brightness oscillation.

use hecs::World;

use helix_core::components::{Brightness, Position, SphereSlot};
use helix_core::constants::*;
use helix_core::enums::SphereKind;

pub fn run(world: &mut World, now_ms: f64) {
    for (_entity, (slot, pos, brightness)) in
        world.query_mut::<(&SphereSlot, &mut Position, &mut Brightness)>()
    {
        if slot.kind != SphereKind::Scatter {
            continue;
        }
        let index = slot.index as f64;
        pos.0.y += (now_ms * SCATTER_DRIFT_Y_RATE + index).sin() * SCATTER_DRIFT_Y_AMPLITUDE;
        pos.0.x += (now_ms * SCATTER_DRIFT_X_RATE + index).cos() * SCATTER_DRIFT_X_AMPLITUDE;
        brightness.0 = scatter_brightness(index, now_ms);
    }
}

/// Brightness in `[0.1, 0.7]`.
pub fn scatter_brightness(index: f64, now_ms: f64) -> f64 {
    SCATTER_BRIGHTNESS_BASE
        + (now_ms * SCATTER_BRIGHTNESS_RATE + index).sin() * SCATTER_BRIGHTNESS_AMPLITUDE
}
