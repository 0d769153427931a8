//! Snapshot system: queries the world and builds a `SceneSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use helix_core::components::*;
use helix_core::state::{SceneSnapshot, SphereView, StarView};
use helix_core::types::{Canvas, FrameClock, PointerState};

use crate::systems::stars;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    clock: &FrameClock,
    canvas: &Canvas,
    rotation: f64,
    pointer: &PointerState,
) -> SceneSnapshot {
    SceneSnapshot {
        clock: *clock,
        canvas: *canvas,
        rotation,
        pointer: *pointer,
        stars: build_stars(world, clock.now_ms),
        spheres: build_spheres(world),
    }
}

fn build_stars(world: &World, now_ms: f64) -> Vec<StarView> {
    world
        .query::<(&Position, &StarBody, &Twinkle)>()
        .iter()
        .map(|(_, (pos, body, twinkle))| StarView {
            position: pos.0,
            size: body.size,
            color: body.color,
            opacity: stars::display_opacity(body, twinkle, now_ms),
        })
        .collect()
}

/// Spheres in index order.
fn build_spheres(world: &World) -> Vec<SphereView> {
    let mut spheres: Vec<SphereView> = world
        .query::<(&SphereSlot, &Position, &Anchor, &SphereBody, &Brightness)>()
        .iter()
        .map(|(_, (slot, pos, anchor, body, brightness))| SphereView {
            index: slot.index,
            kind: slot.kind,
            local: pos.0,
            anchor: anchor.0,
            radius: body.radius,
            color: body.color,
            brightness: brightness.0,
        })
        .collect();
    spheres.sort_by_key(|s| s.index);
    spheres
}
