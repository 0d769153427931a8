//! Pointer interaction: drag toward an active pointer, return to the
//! anchor once the pointer rests.
//!
//! Position-only exponential approach; there is no velocity state.

use glam::DVec2;
use hecs::World;

use helix_core::components::{Anchor, Position};
use helix_core::constants::*;
use helix_core::types::{Canvas, PointerState};

/// Run pointer interaction for every sphere.
pub fn run(world: &mut World, pointer: &PointerState, canvas: &Canvas, now_ms: f64) {
    let center = canvas.center();
    let resting = pointer.is_resting(now_ms);
    let return_strength = if resting {
        return_strength(pointer.idle_ms(now_ms))
    } else {
        0.0
    };

    for (_entity, (pos, anchor)) in world.query_mut::<(&mut Position, &Anchor)>() {
        if resting {
            // y already converges through the helix system
            pos.0.x += (anchor.0.x - pos.0.x) * return_strength;
            continue;
        }

        let Some(pointer_pos) = pointer.position else {
            continue;
        };
        let distance = pointer_pos.distance(center + pos.0);
        if distance < INFLUENCE_RADIUS {
            let target: DVec2 = pointer_pos - center;
            let ease = drag_strength(distance) * DRAG_EASE;
            pos.0 += (target - pos.0) * ease;
        }
    }
}

/// Drag strength for a pointer distance: quadratic falloff from `DRAG_MAX`
/// at zero to 0 at the influence radius.
pub fn drag_strength(distance: f64) -> f64 {
    if distance >= INFLUENCE_RADIUS {
        return 0.0;
    }
    let normalized = distance / INFLUENCE_RADIUS;
    (1.0 - normalized * normalized) * DRAG_MAX
}

/// Return strength after `idle_ms` of pointer inactivity. Ramps linearly
/// from 0 at the rest threshold to `REST_RETURN_MAX` over `REST_RAMP_MS`.
pub fn return_strength(idle_ms: f64) -> f64 {
    let rested = (idle_ms - REST_THRESHOLD_MS).clamp(0.0, REST_RAMP_MS);
    rested / REST_RAMP_MS * REST_RETURN_MAX
}
