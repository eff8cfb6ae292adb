//! Movement rules - gravity, liquid flow, gas lift and extinguishing
//!
//! Every primitive either mutates the grid and returns `true`, or leaves it
//! untouched and returns `false`. Moves are swaps with a neighbor; transforms
//! overwrite the source cell with a tile stamped for the running frame.

use smallvec::SmallVec;

use sandfall_simulation::{Materials, Tile, TileType};

use super::neighbor_queries::NeighborQueries;
use super::{Sandbox, SandboxPoint, SandboxRng, SimStats};

/// Lift candidates as (row, col) deltas: up, up-left, up-right, left, right
const LIFT_OFFSETS: [(isize, isize); 5] = [(-1, 0), (-1, -1), (-1, 1), (0, -1), (0, 1)];

/// Stateless movement primitives operating on a sandbox
pub struct MovementEngine;

impl MovementEngine {
    /// Fall one row, sink through a different liquid, or slide diagonally
    pub fn do_gravity<R: SandboxRng>(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        let Some(down) = sandbox.neighbor(at, 1, 0) else {
            return false;
        };

        let source = sandbox.at(at);
        if Self::can_sink_into(sandbox, source, down) {
            Self::swap(sandbox, at, down, stats);
            return true;
        }

        let left_walled = Self::is_walled(sandbox, at, -1);
        let right_walled = Self::is_walled(sandbox, at, 1);
        if left_walled && right_walled {
            return false;
        }

        // One open side is enough to try both diagonals
        let diagonal = |d_col: isize| {
            sandbox
                .neighbor(at, 1, d_col)
                .filter(|&target| Self::can_sink_into(sandbox, source, target))
        };
        let down_left = diagonal(-1);
        let down_right = diagonal(1);

        match Self::pick_one(down_left, down_right, rng) {
            Some(target) => {
                Self::swap(sandbox, at, target, stats);
                true
            }
            None => false,
        }
    }

    /// Spread sideways while resting on a solid, a liquid or the floor
    pub fn do_flow<R: SandboxRng>(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        if let Some(below) = sandbox.neighbor(at, 1, 0) {
            let support = Materials::of_tile(sandbox.at(below));
            if !support.is_solid && !support.is_liquid {
                return false;
            }
        }

        let source = sandbox.at(at);
        let side = |d_col: isize| {
            sandbox.neighbor(at, 0, d_col).filter(|&target| {
                let tile = sandbox.at(target);
                tile.is_empty()
                    || (Materials::of_tile(tile).is_liquid
                        && tile.type_id() != source.type_id()
                        && !Self::has_moved(sandbox, target))
            })
        };
        let left = side(-1);
        let right = side(1);

        match Self::pick_one(left, right, rng) {
            Some(target) => {
                Self::swap(sandbox, at, target, stats);
                true
            }
            None => false,
        }
    }

    /// Rise or drift: choose uniformly among every open lift candidate
    pub fn do_lift<R: SandboxRng>(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        let source = sandbox.at(at);
        let mut candidates: SmallVec<[SandboxPoint; 5]> = SmallVec::new();

        for (d_row, d_col) in LIFT_OFFSETS {
            let Some(target) = sandbox.neighbor(at, d_row, d_col) else {
                continue;
            };
            let tile = sandbox.at(target);
            let rules = Materials::of_tile(tile);
            let straight_up = d_row == -1 && d_col == 0;

            // Gases bubble up through liquid but never push it sideways
            let open = tile.is_empty()
                || (!Self::has_moved(sandbox, target)
                    && ((rules.is_liquid && straight_up)
                        || (rules.is_gas && tile.type_id() != source.type_id())));
            if open {
                candidates.push(target);
            }
        }

        if candidates.is_empty() {
            return false;
        }

        let target = candidates[rng.gen_index(candidates.len())];
        Self::swap(sandbox, at, target, stats);
        true
    }

    /// Fire touching water turns into steam
    pub fn do_extinguish(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        stats: &mut dyn SimStats,
    ) -> bool {
        let touches_water = NeighborQueries::any_cardinal(sandbox, at, |tile| {
            tile.type_id() == TileType::Water.id()
        });
        if !touches_water {
            return false;
        }

        sandbox.set(at, Tile::stamped(TileType::Steam, sandbox.lifetime()));
        stats.record_extinguish();
        true
    }

    /// Empty cells always accept a falling tile. A liquid of another type
    /// accepts it unless the falling tile dissolves into liquids or the
    /// liquid has already moved this frame.
    fn can_sink_into(sandbox: &Sandbox, source: Tile, target: SandboxPoint) -> bool {
        let tile = sandbox.at(target);
        if tile.is_empty() {
            return true;
        }
        Materials::of_tile(tile).is_liquid
            && tile.type_id() != source.type_id()
            && !Materials::of_tile(source).dissolves
            && !Self::has_moved(sandbox, target)
    }

    /// A non-empty tile already moved or transformed in the running frame
    fn has_moved(sandbox: &Sandbox, at: SandboxPoint) -> bool {
        let tile = sandbox.at(at);
        !tile.is_empty() && tile.is_updated(sandbox.lifetime())
    }

    /// A side counts as a wall if it is the world edge or holds a solid tile
    fn is_walled(sandbox: &Sandbox, at: SandboxPoint, d_col: isize) -> bool {
        match sandbox.neighbor(at, 0, d_col) {
            Some(side) => Materials::of_tile(sandbox.at(side)).is_solid,
            None => true,
        }
    }

    /// Coin flip between two options, or whichever one exists
    fn pick_one<R: SandboxRng>(
        first: Option<SandboxPoint>,
        second: Option<SandboxPoint>,
        rng: &mut R,
    ) -> Option<SandboxPoint> {
        match (first, second) {
            (Some(first), Some(second)) => Some(if rng.gen_bool() { first } else { second }),
            (first, None) => first,
            (None, second) => second,
        }
    }

    /// Swap `from` into `to`. A tile pushed back into `from` counts as moved.
    fn swap(sandbox: &mut Sandbox, from: SandboxPoint, to: SandboxPoint, stats: &mut dyn SimStats) {
        sandbox.swap_tiles(from, to);
        let time = sandbox.lifetime();
        let displaced = sandbox.at_mut(from);
        if !displaced.is_empty() {
            displaced.set_updated(time);
        }
        stats.record_tile_moved();
    }
}
