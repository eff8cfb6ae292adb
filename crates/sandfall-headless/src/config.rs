//! Headless run configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `sandfall.ron` file (if exists)
//! 3. Environment variables prefixed with `SANDFALL_`
//!
//! Example environment variable: `SANDFALL_FRAMES=600`

use anyhow::{Context, Result, bail};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sandfall_core::simulation::TileType;

/// Named sandbox sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizePreset {
    /// (width, height) in tiles
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            SizePreset::Small => (80, 45),
            SizePreset::Medium => (160, 90),
            SizePreset::Large => (320, 180),
        }
    }
}

/// Built-in starting scenes, used when no explicit strokes are configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenePreset {
    /// Start from an all-air sandbox
    Empty,
    #[default]
    Campfire,
    Hourglass,
    Rain,
}

/// One circular brush application. Air erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushStroke {
    pub tile: TileType,
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub radius: usize,
}

/// Headless driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessConfig {
    /// Named sandbox size
    #[serde(default)]
    pub size: SizePreset,
    /// Explicit width in tiles; overrides `size` together with `height`
    #[serde(default)]
    pub width: Option<usize>,
    /// Explicit height in tiles; overrides `size` together with `width`
    #[serde(default)]
    pub height: Option<usize>,

    /// Number of frames to simulate
    pub frames: u64,
    /// RNG seed; absent means seeded from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print the grid every N frames (0 = only the final frame)
    pub print_every: u64,

    /// Scene used when `scene` is empty
    #[serde(default)]
    pub scene_preset: ScenePreset,
    /// Explicit brush strokes, painted in order
    #[serde(default)]
    pub scene: Vec<BrushStroke>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            size: SizePreset::Small,
            width: None,
            height: None,
            frames: 300,
            seed: None,
            print_every: 0,
            scene_preset: ScenePreset::Campfire,
            scene: Vec::new(),
        }
    }
}

impl HeadlessConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `sandfall.ron` file (if exists)
    /// 3. Environment variables prefixed with `SANDFALL_` (highest priority)
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("sandfall")
                    .format(FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (SANDFALL_FRAMES, SANDFALL_SEED, etc.)
            .add_source(
                Environment::with_prefix("SANDFALL")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::build(builder)
    }

    /// Load from RON text layered over the compiled defaults
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(source, FileFormat::Ron));
        Self::build(builder)
    }

    /// Layer 1: compiled defaults
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("size", "small")?
            .set_default("frames", 300_i64)?
            .set_default("print_every", 0_i64)?
            .set_default("scene_preset", "campfire")?;
        Ok(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot describe a run
    pub fn validate(&self) -> Result<()> {
        self.dimensions()?;
        Ok(())
    }

    /// Resolved (width, height) in tiles
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let (width, height) = match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            (None, None) => self.size.dimensions(),
            (width, height) => bail!(
                "width and height must be given together (width: {:?}, height: {:?})",
                width,
                height
            ),
        };

        if width == 0 || height == 0 {
            bail!("sandbox dimensions must be non-zero (got {width}x{height})");
        }
        Ok((width, height))
    }
}
