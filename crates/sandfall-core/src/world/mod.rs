//! Sandbox world - tile grid, update scheduler and movement rules

mod chemistry_system;
mod error;
mod movement;
mod neighbor_queries;
pub mod rng_trait;
mod sandbox;
mod scheduler;
pub mod stats;

pub use chemistry_system::ChemistrySystem;
pub use error::SandboxError;
pub use movement::MovementEngine;
pub use neighbor_queries::{CARDINAL_OFFSETS, NeighborQueries};
pub use rng_trait::{DefaultSandboxRng, SandboxRng, entropy_rng, seeded_rng};
pub use sandbox::{Sandbox, SandboxPoint, TileCensus};
pub use stats::{FrameStats, NoopStats, SimStats};
