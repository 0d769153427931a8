//! Scene engine for HELIX.
//!
//! Owns the hecs ECS world, runs the per-frame systems, produces
//! `SceneSnapshot`s and renders them onto an abstract drawing surface.

pub mod draw_list;
pub mod engine;
pub mod render;
pub mod surface;
pub mod systems;
pub mod world_setup;

pub use helix_core as core;
pub use draw_list::{DrawList, DrawOp};
pub use engine::SceneEngine;
pub use surface::{ColorStop, RadialGradient, Rect, Surface};

#[cfg(test)]
mod tests;
