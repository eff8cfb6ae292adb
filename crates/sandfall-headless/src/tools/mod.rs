//! Brush tools for painting scenes

mod erase;
mod pen;

pub use erase::EraseTool;
pub use pen::PenTool;

use sandfall_core::simulation::TileType;
use sandfall_core::world::{Sandbox, SandboxPoint};

/// Trait for drawing tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool at position with given brush radius
    fn apply(&self, sandbox: &mut Sandbox, center: SandboxPoint, radius: usize);
}

/// Points of a filled disc that lie inside the sandbox
///
/// Only the part of the disc's bounding box that overlaps the grid is
/// visited, so the radius may be arbitrarily large.
fn disc_points(
    sandbox: &Sandbox,
    center: SandboxPoint,
    radius: usize,
) -> impl Iterator<Item = SandboxPoint> {
    let last_row = sandbox.height() - 1;
    let last_col = sandbox.width() - 1;
    let rows = center.row.saturating_sub(radius)
        ..=center.row.saturating_add(radius).min(last_row);
    let cols = center.col.saturating_sub(radius)
        ..=center.col.saturating_add(radius).min(last_col);
    let radius_squared = (radius as u128).pow(2);

    rows.flat_map(move |row| cols.clone().map(move |col| SandboxPoint::new(row, col)))
        .filter(move |point| {
            let dy = point.row.abs_diff(center.row) as u128;
            let dx = point.col.abs_diff(center.col) as u128;
            (dy * dy).saturating_add(dx * dx) <= radius_squared
        })
}

/// Place tiles in a filled disc. Occupied cells keep their tile.
pub fn draw_circle(
    sandbox: &mut Sandbox,
    center: SandboxPoint,
    radius: usize,
    tile_type: TileType,
) {
    for point in disc_points(sandbox, center, radius) {
        sandbox.place_tile(point, tile_type);
    }
}

/// Clear a filled disc back to air
pub fn erase_circle(sandbox: &mut Sandbox, center: SandboxPoint, radius: usize) {
    for point in disc_points(sandbox, center, radius) {
        sandbox.delete_tile(point);
    }
}
