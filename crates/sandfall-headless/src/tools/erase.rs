//! Eraser tool

use super::{Tool, erase_circle};
use sandfall_core::world::{Sandbox, SandboxPoint};

/// Eraser tool that clears tiles back to air
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn apply(&self, sandbox: &mut Sandbox, center: SandboxPoint, radius: usize) {
        erase_circle(sandbox, center, radius);
    }
}
