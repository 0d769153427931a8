//! Per-frame systems that operate on the scene world.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod helix;
pub mod pointer;
pub mod scatter;
pub mod snapshot;
pub mod stars;
