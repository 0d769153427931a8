//! Host-level errors.

use thiserror::Error;

use helix_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The window or its drawing surface could not be created.
    #[error("failed to start window: {0}")]
    Window(#[from] eframe::Error),
}
