//! Helix system: rotation, wobble, depth brightness and vertical easing.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use helix_core::components::{Anchor, Brightness, Position, SphereSlot};
use helix_core::constants::*;
use helix_core::enums::SphereKind;

/// Update every helix sphere for the current rotation.
///
/// The vertical anchor follows the rotating cosine curve plus a small wobble;
/// the sphere eases toward it by a random factor in
/// `[HELIX_EASE_MIN, HELIX_EASE_MAX)` each tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rotation: f64,
    sphere_count: usize,
    now_ms: f64,
) {
    for (_entity, (slot, pos, anchor, brightness)) in world.query_mut::<(
        &SphereSlot,
        &mut Position,
        &mut Anchor,
        &mut Brightness,
    )>() {
        let SphereKind::Helix { strand } = slot.kind else {
            continue;
        };

        let index = slot.index as f64;
        let phase = helix_phase(slot.index, sphere_count, rotation) + strand.phase_offset();
        let wobble = (now_ms * WOBBLE_RATE + index).sin() * WOBBLE_AMPLITUDE;

        anchor.0.y = phase.cos() * HELIX_RADIUS + wobble;
        brightness.0 = depth_brightness(phase.sin());

        let ease = rng.gen_range(HELIX_EASE_MIN..HELIX_EASE_MAX);
        pos.0.y += (anchor.0.y - pos.0.y) * ease;
    }
}

/// Helix parameter for a sphere index before the strand offset.
pub fn helix_phase(index: usize, sphere_count: usize, rotation: f64) -> f64 {
    (index as f64 / 2.0 / sphere_count as f64) * HELIX_PHASE_SPAN + rotation
}

/// Map simulated depth in `[-1, 1]` to brightness in `[0.3, 1.0]`.
pub fn depth_brightness(z_depth: f64) -> f64 {
    HELIX_BRIGHTNESS_MIN + (z_depth + 1.0) / 2.0 * HELIX_BRIGHTNESS_SPAN
}
