//! Frame scheduler - one top-to-bottom, left-to-right pass per frame

use sandfall_simulation::{Materials, TileType};

use super::{
    ChemistrySystem, MovementEngine, NoopStats, Sandbox, SandboxPoint, SandboxRng, SimStats,
};

impl Sandbox {
    /// Advance the simulation by one frame
    pub fn process_sandbox<R: SandboxRng>(&mut self, rng: &mut R) {
        self.process_sandbox_with_stats(rng, &mut NoopStats);
    }

    /// Advance by one frame, reporting every move and transform to `stats`
    pub fn process_sandbox_with_stats<R: SandboxRng>(
        &mut self,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let time = self.lifetime();

        for row in 0..self.height() {
            for col in 0..self.width() {
                self.update_tile(SandboxPoint::new(row, col), time, rng, stats);
            }
        }

        self.advance_lifetime();
        log::trace!(
            "Frame {} processed ({}x{} sandbox)",
            time,
            self.width(),
            self.height()
        );
    }

    fn update_tile<R: SandboxRng>(
        &mut self,
        at: SandboxPoint,
        time: u64,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let tile = self.at(at);
        if tile.is_empty() || tile.is_updated(time) {
            return;
        }

        let rules = Materials::of_tile(tile);

        if ChemistrySystem::roll_survival(self, at, rules, rng, stats) {
            return;
        }
        if ChemistrySystem::roll_combustion(self, at, rules, rng, stats) {
            return;
        }

        // Mark first: a tile swapped further along the scan must not run again
        self.at_mut(at).set_updated(time);

        let is_fire = tile.tile_type() == Some(TileType::Fire);
        if is_fire && MovementEngine::do_extinguish(self, at, stats) {
            return;
        }
        if rules.has_gravity && MovementEngine::do_gravity(self, at, rng, stats) {
            return;
        }
        if rules.is_liquid && MovementEngine::do_flow(self, at, rng, stats) {
            return;
        }
        if rules.is_gas {
            MovementEngine::do_lift(self, at, rng, stats);
        }
    }
}
