//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use helix_core::config::{ConfigError, SceneConfig};

#[derive(Debug, Parser)]
#[command(
    name = "helix",
    version,
    about = "A rotating double helix of glowing spheres over a drifting starfield"
)]
pub struct Cli {
    /// JSON scene configuration. Flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// RNG seed for scene generation.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Initial window width.
    #[arg(long)]
    pub width: Option<f64>,
    /// Initial window height.
    #[arg(long)]
    pub height: Option<f64>,
    /// Spheres per helix strand.
    #[arg(long)]
    pub sphere_count: Option<usize>,
    /// Interpolate the blue channel of the colour ramp.
    #[arg(long)]
    pub corrected_blue: bool,
    /// Rebuild the scene when the window is resized.
    #[arg(long)]
    pub regenerate_on_resize: bool,
}

impl Cli {
    /// Merge the config file (or defaults) with explicit flags.
    pub fn resolve_config(&self) -> Result<SceneConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(count) = self.sphere_count {
            config.sphere_count = count;
        }
        config.corrected_blue_channel |= self.corrected_blue;
        config.regenerate_on_resize |= self.regenerate_on_resize;

        config.validate()?;
        Ok(config)
    }
}
