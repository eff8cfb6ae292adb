//! Starting scenes - built-in presets and stroke painting

use sandfall_core::simulation::TileType;
use sandfall_core::world::{Sandbox, SandboxPoint};

use crate::config::{BrushStroke, ScenePreset};
use crate::tools::{EraseTool, PenTool, Tool};

fn stroke(tile: TileType, row: usize, col: usize, radius: usize) -> BrushStroke {
    BrushStroke {
        tile,
        row,
        col,
        radius,
    }
}

impl ScenePreset {
    /// Brush strokes laying out this preset in a `width` x `height` sandbox
    pub fn strokes(self, width: usize, height: usize) -> Vec<BrushStroke> {
        let floor = height.saturating_sub(1);
        let center = width / 2;
        let scale = (width.min(height) / 12).max(1);

        match self {
            ScenePreset::Empty => Vec::new(),

            // Wood pile with a puddle of fuel on one side and fire on top
            ScenePreset::Campfire => vec![
                stroke(TileType::Wood, floor, center, scale * 2),
                stroke(TileType::Fuel, floor, center.saturating_sub(scale * 4), scale),
                stroke(TileType::Sand, floor, center + scale * 4, scale * 2),
                stroke(TileType::Fire, floor.saturating_sub(scale * 2 + 1), center, 0),
            ],

            // Two wood discs leave a one-tile neck for the sand above
            ScenePreset::Hourglass => {
                let neck_row = height / 2;
                let side = scale * 2;
                vec![
                    stroke(TileType::Wood, neck_row, center.saturating_sub(side + 1), side),
                    stroke(TileType::Wood, neck_row, center + side + 1, side),
                    stroke(TileType::Sand, height / 4, center, scale * 2),
                ]
            }

            // Droplets along the top falling onto a burning log
            ScenePreset::Rain => {
                let mut strokes: Vec<_> = (1..width)
                    .step_by(3)
                    .map(|col| stroke(TileType::Water, col % 4, col, 0))
                    .collect();
                strokes.push(stroke(TileType::Wood, floor, center, scale * 3));
                let fire_row = floor.saturating_sub(scale * 3 + 1);
                strokes.push(stroke(TileType::Fire, fire_row, center, 0));
                strokes
            }
        }
    }
}

/// Paint strokes in order. Air strokes erase.
pub fn paint_scene(sandbox: &mut Sandbox, strokes: &[BrushStroke]) {
    for brush in strokes {
        let center = SandboxPoint::new(brush.row, brush.col);
        let tool: Box<dyn Tool> = match brush.tile {
            TileType::Air => Box::new(EraseTool),
            tile_type => Box::new(PenTool::new(tile_type)),
        };

        log::debug!(
            "{} {:?} at ({}, {}) radius {}",
            tool.name(),
            brush.tile,
            brush.row,
            brush.col,
            brush.radius
        );
        tool.apply(sandbox, center, brush.radius);
    }
}
