//! Tile data for Sandfall
//!
//! This crate provides the foundational data types for the particle grid:
//! - Tile encoding (Tile, TileType, TileFlags, parity helpers)
//! - Per-type behavior tables (TileRules, Materials)

mod materials;
mod tile;

pub use materials::{Materials, TileRules};
pub use tile::{TYPE_ID_COUNT, TYPE_MASK, Tile, TileFlags, TileType, get_time_parity};
