//! HELIX native host.
//!
//! Wires the headless scene engine to an `eframe` window: pointer and
//! resize events become scene commands, a monotonic clock drives frames and
//! snapshots are painted through an egui-backed surface.

pub mod app;
pub mod cli;
pub mod error;
pub mod frame_loop;
pub mod surface;

pub use helix_core as core;
pub use error::HostError;
