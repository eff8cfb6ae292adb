//! Pen tool

use super::{Tool, draw_circle};
use sandfall_core::simulation::TileType;
use sandfall_core::world::{Sandbox, SandboxPoint};

/// Pen tool that places one tile type
pub struct PenTool {
    tile_type: TileType,
}

impl PenTool {
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, sandbox: &mut Sandbox, center: SandboxPoint, radius: usize) {
        draw_circle(sandbox, center, radius, self.tile_type);
    }
}
