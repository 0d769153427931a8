//! Core types and definitions for the HELIX scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! colours, components, commands, snapshots, configuration and constants.
//! It has no dependency on the ECS, the RNG or any windowing framework.

pub mod color;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
