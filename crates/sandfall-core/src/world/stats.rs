//! Simulation statistics collection

/// Trait for collecting simulation statistics
///
/// The scheduler reports every swap and every in-place transform here, so a
/// front end can count activity without the core keeping counters itself.
pub trait SimStats {
    /// Record that a tile was swapped with a neighbor
    fn record_tile_moved(&mut self);

    /// Record that a flammable tile turned into fire
    fn record_ignition(&mut self);

    /// Record that fire turned into steam next to water
    fn record_extinguish(&mut self);

    /// Record that a decaying tile failed its survival roll
    fn record_decay(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_tile_moved(&mut self) {}
    fn record_ignition(&mut self) {}
    fn record_extinguish(&mut self) {}
    fn record_decay(&mut self) {}
}

/// Counting implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub tiles_moved: u64,
    pub ignitions: u64,
    pub extinguished: u64,
    pub decayed: u64,
}

impl FrameStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ignitions, extinguishes and decays combined
    pub fn total_transforms(&self) -> u64 {
        self.ignitions + self.extinguished + self.decayed
    }

    /// Add another set of counters into this one
    pub fn accumulate(&mut self, other: &FrameStats) {
        self.tiles_moved += other.tiles_moved;
        self.ignitions += other.ignitions;
        self.extinguished += other.extinguished;
        self.decayed += other.decayed;
    }
}

impl SimStats for FrameStats {
    fn record_tile_moved(&mut self) {
        self.tiles_moved += 1;
    }

    fn record_ignition(&mut self) {
        self.ignitions += 1;
    }

    fn record_extinguish(&mut self) {
        self.extinguished += 1;
    }

    fn record_decay(&mut self) {
        self.decayed += 1;
    }
}
