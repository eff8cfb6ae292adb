//! Neighbor tile lookups

use sandfall_simulation::Tile;

use super::{Sandbox, SandboxPoint};

/// Row/column deltas of the 4 cardinal neighbors.
///
/// Order: N, E, S, W
pub const CARDINAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Neighbor collection utilities - stateless methods for querying neighboring tiles
pub struct NeighborQueries;

impl NeighborQueries {
    /// Iterate over the in-bounds cardinal neighbors of `center`
    pub fn cardinal_neighbors(
        sandbox: &Sandbox,
        center: SandboxPoint,
    ) -> impl Iterator<Item = (SandboxPoint, Tile)> + '_ {
        CARDINAL_OFFSETS.into_iter().filter_map(move |(d_row, d_col)| {
            sandbox
                .neighbor(center, d_row, d_col)
                .map(|point| (point, sandbox.at(point)))
        })
    }

    /// Whether any in-bounds cardinal neighbor satisfies `predicate`
    pub fn any_cardinal<F>(sandbox: &Sandbox, center: SandboxPoint, mut predicate: F) -> bool
    where
        F: FnMut(Tile) -> bool,
    {
        Self::cardinal_neighbors(sandbox, center).any(|(_, tile)| predicate(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandfall_simulation::TileType;

    #[test]
    fn test_interior_point_has_four_neighbors() {
        let sandbox = Sandbox::create_sandbox(3, 3).unwrap();
        let neighbors: Vec<_> =
            NeighborQueries::cardinal_neighbors(&sandbox, SandboxPoint::new(1, 1))
                .map(|(point, _)| point)
                .collect();

        assert_eq!(
            neighbors,
            vec![
                SandboxPoint::new(0, 1),
                SandboxPoint::new(1, 2),
                SandboxPoint::new(2, 1),
                SandboxPoint::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_corner_point_skips_out_of_bounds() {
        let sandbox = Sandbox::create_sandbox(3, 3).unwrap();
        assert_eq!(
            NeighborQueries::cardinal_neighbors(&sandbox, SandboxPoint::new(0, 0)).count(),
            2
        );
        assert_eq!(
            NeighborQueries::cardinal_neighbors(&sandbox, SandboxPoint::new(2, 2)).count(),
            2
        );
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let sandbox = Sandbox::create_sandbox(1, 1).unwrap();
        assert_eq!(
            NeighborQueries::cardinal_neighbors(&sandbox, SandboxPoint::new(0, 0)).count(),
            0
        );
    }

    #[test]
    fn test_any_cardinal_ignores_diagonals() {
        let mut sandbox = Sandbox::create_sandbox(3, 3).unwrap();
        sandbox.place_tile(SandboxPoint::new(0, 0), TileType::Water);

        let is_water = |tile: Tile| tile.tile_type() == Some(TileType::Water);
        assert!(!NeighborQueries::any_cardinal(&sandbox, SandboxPoint::new(1, 1), is_water));

        sandbox.place_tile(SandboxPoint::new(1, 0), TileType::Water);
        assert!(NeighborQueries::any_cardinal(&sandbox, SandboxPoint::new(1, 1), is_water));
    }
}
