//! Scene configuration, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorRamp;
use crate::constants::{SCATTER_COUNT, SPHERE_COUNT, STAR_COUNT};
use crate::types::Canvas;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("canvas must have positive finite dimensions, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("sphere count must be at least 1")]
    InvalidSphereCount,
}

/// Configuration for building a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed. Same seed and same inputs give the same frames.
    pub seed: u64,
    /// Initial canvas size.
    pub canvas: Canvas,
    /// Spheres per helix strand.
    pub sphere_count: usize,
    pub scatter_count: usize,
    pub star_count: usize,
    /// Interpolate the blue channel of the colour ramp.
    pub corrected_blue_channel: bool,
    /// Rebuild all entities for the new canvas on resize.
    pub regenerate_on_resize: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas: Canvas::default(),
            sphere_count: SPHERE_COUNT,
            scatter_count: SCATTER_COUNT,
            star_count: STAR_COUNT,
            corrected_blue_channel: false,
            regenerate_on_resize: false,
        }
    }
}

impl SceneConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.canvas.is_valid() {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.sphere_count == 0 {
            return Err(ConfigError::InvalidSphereCount);
        }
        Ok(())
    }

    pub fn color_ramp(&self) -> ColorRamp {
        ColorRamp::new(self.corrected_blue_channel)
    }

    /// Total spheres the scene will hold.
    pub fn total_spheres(&self) -> usize {
        2 * self.sphere_count + self.scatter_count
    }
}
