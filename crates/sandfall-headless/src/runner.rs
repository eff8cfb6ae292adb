//! Frame loop for headless runs

use std::io::Write;

use anyhow::{Context, Result};

use sandfall_core::simulation::{Materials, TileType};
use sandfall_core::world::{DefaultSandboxRng, FrameStats, Sandbox, entropy_rng, seeded_rng};

use crate::config::HeadlessConfig;
use crate::scene::paint_scene;

/// Owns one sandbox and drives it for the configured number of frames
pub struct Runner {
    config: HeadlessConfig,
    sandbox: Sandbox,
    rng: DefaultSandboxRng,
    totals: FrameStats,
}

impl Runner {
    /// Build the sandbox described by `config` and paint its starting scene
    pub fn new(config: HeadlessConfig) -> Result<Self> {
        let (width, height) = config.dimensions()?;
        let mut sandbox = Sandbox::create_sandbox(width, height)
            .with_context(|| format!("Failed to create {width}x{height} sandbox"))?;

        if config.scene.is_empty() {
            log::info!("Painting {:?} scene", config.scene_preset);
            paint_scene(&mut sandbox, &config.scene_preset.strokes(width, height));
        } else {
            log::info!("Painting {} configured strokes", config.scene.len());
            paint_scene(&mut sandbox, &config.scene);
        }

        let rng = match config.seed {
            Some(seed) => {
                log::info!("Using seed {}", seed);
                seeded_rng(seed)
            }
            None => entropy_rng(),
        };

        Ok(Self {
            config,
            sandbox,
            rng,
            totals: FrameStats::default(),
        })
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    /// Counters summed over every frame run so far
    pub fn totals(&self) -> FrameStats {
        self.totals
    }

    /// Simulate one frame and return its counters
    pub fn step(&mut self) -> FrameStats {
        let mut frame = FrameStats::default();
        self.sandbox.process_sandbox_with_stats(&mut self.rng, &mut frame);
        self.totals.accumulate(&frame);
        frame
    }

    /// Run all configured frames, printing the grid to `out` as configured
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<FrameStats> {
        let frames = self.config.frames;
        let print_every = self.config.print_every;

        for _ in 0..frames {
            let frame = self.step();
            let lifetime = self.sandbox.lifetime();

            if print_every > 0 && lifetime % print_every == 0 {
                self.print_frame(out)?;
            }
            log::trace!(
                "Frame {}: {} moved, {} transformed",
                lifetime,
                frame.tiles_moved,
                frame.total_transforms()
            );
        }

        // The final frame is always shown, unless it was just printed
        if print_every == 0 || frames % print_every != 0 {
            self.print_frame(out)?;
        }

        self.log_summary();
        Ok(self.totals)
    }

    fn print_frame<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "frame {}", self.sandbox.lifetime()).context("Failed to write frame")?;
        write!(out, "{}", self.sandbox).context("Failed to write frame")?;
        out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn log_summary(&self) {
        log::info!(
            "Ran {} frames: {} moves, {} ignitions, {} extinguished, {} decayed",
            self.sandbox.lifetime(),
            self.totals.tiles_moved,
            self.totals.ignitions,
            self.totals.extinguished,
            self.totals.decayed
        );

        let census = self.sandbox.census();
        for tile_type in TileType::ALL.into_iter().skip(1) {
            let count = census[tile_type as usize];
            if count > 0 {
                log::info!("  {}: {}", Materials::of(tile_type).name, count);
            }
        }
    }
}
