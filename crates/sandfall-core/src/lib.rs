pub mod world;

pub use world::{Sandbox, SandboxError, SandboxPoint};

// Re-export the tile model so front ends only need this crate
pub mod simulation {
    pub use sandfall_simulation::*;
}
