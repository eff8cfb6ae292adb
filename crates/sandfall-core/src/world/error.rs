//! Sandbox construction errors

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("sandbox dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("sandbox of {width}x{height} tiles does not fit in memory")]
    DimensionsOverflow { width: usize, height: usize },

    #[error("failed to allocate sandbox grid")]
    Allocation(#[from] TryReserveError),
}
