//! Chemistry - decay of short-lived tiles and ignition of flammable ones

use sandfall_simulation::{Materials, Tile, TileRules, TileType};

use super::neighbor_queries::NeighborQueries;
use super::{Sandbox, SandboxPoint, SandboxRng, SimStats};

/// Stateless chemistry rolls applied before a tile moves
pub struct ChemistrySystem;

impl ChemistrySystem {
    /// Roll whether a decaying tile survives this frame.
    ///
    /// Returns `true` if the tile vanished into air. Tiles with a survival
    /// chance of 1.0 never draw from the rng.
    pub fn roll_survival<R: SandboxRng>(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        rules: &TileRules,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        if !rules.decays() || rng.check_probability(rules.survival_chance) {
            return false;
        }

        sandbox.set(at, Tile::AIR);
        stats.record_decay();
        true
    }

    /// Roll whether a flammable tile catches fire from an incendiary neighbor.
    ///
    /// Returns `true` if the tile turned into fire. The rng is only drawn
    /// for flammable tiles that touch fire.
    pub fn roll_combustion<R: SandboxRng>(
        sandbox: &mut Sandbox,
        at: SandboxPoint,
        rules: &TileRules,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        if !rules.is_flammable() {
            return false;
        }

        let near_flame = NeighborQueries::any_cardinal(sandbox, at, |tile| {
            Materials::of_tile(tile).is_incendiary
        });
        if !near_flame || !rng.check_probability(rules.flammability) {
            return false;
        }

        sandbox.set(at, Tile::stamped(TileType::Fire, sandbox.lifetime()));
        stats.record_ignition();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::FrameStats;

    /// Rng whose float draws are fixed
    struct FixedRng(f32);

    impl SandboxRng for FixedRng {
        fn gen_bool(&mut self) -> bool {
            true
        }

        fn gen_f32(&mut self) -> f32 {
            self.0
        }

        fn gen_range_inclusive(&mut self, min: i32, _max: i32) -> i32 {
            min
        }

        fn gen_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    /// Rng that fails the test if the chemistry draws from it
    struct UntouchedRng;

    impl SandboxRng for UntouchedRng {
        fn gen_bool(&mut self) -> bool {
            panic!("unexpected rng draw");
        }

        fn gen_f32(&mut self) -> f32 {
            panic!("unexpected rng draw");
        }

        fn gen_range_inclusive(&mut self, _min: i32, _max: i32) -> i32 {
            panic!("unexpected rng draw");
        }

        fn gen_index(&mut self, _len: usize) -> usize {
            panic!("unexpected rng draw");
        }
    }

    fn p(row: usize, col: usize) -> SandboxPoint {
        SandboxPoint::new(row, col)
    }

    #[test]
    fn test_steam_survives_low_draw() {
        let mut sandbox = Sandbox::create_sandbox(1, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Steam);
        let rules = Materials::of(TileType::Steam);

        assert!(!ChemistrySystem::roll_survival(
            &mut sandbox,
            p(0, 0),
            rules,
            &mut FixedRng(0.5),
            &mut FrameStats::default()
        ));
        assert_eq!(sandbox.tile(p(0, 0)).and_then(Tile::tile_type), Some(TileType::Steam));
    }

    #[test]
    fn test_fire_decays_on_high_draw() {
        let mut sandbox = Sandbox::create_sandbox(1, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Fire);
        let rules = Materials::of(TileType::Fire);
        let mut stats = FrameStats::default();

        assert!(ChemistrySystem::roll_survival(
            &mut sandbox,
            p(0, 0),
            rules,
            &mut FixedRng(0.9),
            &mut stats
        ));
        assert_eq!(sandbox.tile(p(0, 0)), Some(Tile::AIR));
        assert_eq!(stats.decayed, 1);
    }

    #[test]
    fn test_survival_boundary_draw_decays() {
        let mut sandbox = Sandbox::create_sandbox(1, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Fire);
        let rules = Materials::of(TileType::Fire);

        // A draw equal to the survival chance is a failed roll
        let draw = rules.survival_chance;
        assert!(ChemistrySystem::roll_survival(
            &mut sandbox,
            p(0, 0),
            rules,
            &mut FixedRng(draw),
            &mut FrameStats::default()
        ));
    }

    #[test]
    fn test_stable_tiles_skip_survival_roll() {
        let mut sandbox = Sandbox::create_sandbox(1, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Sand);

        assert!(!ChemistrySystem::roll_survival(
            &mut sandbox,
            p(0, 0),
            Materials::of(TileType::Sand),
            &mut UntouchedRng,
            &mut FrameStats::default()
        ));
    }

    #[test]
    fn test_wood_ignites_next_to_fire() {
        let mut sandbox = Sandbox::create_sandbox(2, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Wood);
        sandbox.place_tile(p(0, 1), TileType::Fire);
        let mut stats = FrameStats::default();

        assert!(ChemistrySystem::roll_combustion(
            &mut sandbox,
            p(0, 0),
            Materials::of(TileType::Wood),
            &mut FixedRng(0.1),
            &mut stats
        ));

        let fire = sandbox.tile(p(0, 0)).unwrap();
        assert_eq!(fire.tile_type(), Some(TileType::Fire));
        assert!(fire.is_updated(sandbox.lifetime()));
        assert_eq!(stats.ignitions, 1);
    }

    #[test]
    fn test_wood_resists_on_high_draw() {
        let mut sandbox = Sandbox::create_sandbox(2, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Wood);
        sandbox.place_tile(p(0, 1), TileType::Fire);

        assert!(!ChemistrySystem::roll_combustion(
            &mut sandbox,
            p(0, 0),
            Materials::of(TileType::Wood),
            &mut FixedRng(0.99),
            &mut FrameStats::default()
        ));
        assert_eq!(sandbox.tile(p(0, 0)).and_then(Tile::tile_type), Some(TileType::Wood));
    }

    #[test]
    fn test_no_ignition_without_incendiary_neighbor() {
        let mut sandbox = Sandbox::create_sandbox(2, 2).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Fuel);
        // Diagonal fire does not count
        sandbox.place_tile(p(1, 1), TileType::Fire);

        assert!(!ChemistrySystem::roll_combustion(
            &mut sandbox,
            p(0, 0),
            Materials::of(TileType::Fuel),
            &mut UntouchedRng,
            &mut FrameStats::default()
        ));
    }

    #[test]
    fn test_non_flammable_tiles_skip_combustion_roll() {
        let mut sandbox = Sandbox::create_sandbox(2, 1).unwrap();
        sandbox.place_tile(p(0, 0), TileType::Water);
        sandbox.place_tile(p(0, 1), TileType::Fire);

        assert!(!ChemistrySystem::roll_combustion(
            &mut sandbox,
            p(0, 0),
            Materials::of(TileType::Water),
            &mut UntouchedRng,
            &mut FrameStats::default()
        ));
    }
}
