//! Tile encoding
//!
//! A tile is a single byte. The low nibble holds the type id (0-15), bit 7
//! holds the update-parity flag. Bit 6 is reserved, bits 4-5 are unused.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask selecting the type id bits of a tile
pub const TYPE_MASK: u8 = 0x0F;

/// Number of distinct type ids a tile can encode
pub const TYPE_ID_COUNT: usize = 16;

bitflags! {
    /// Flag bits stored above the type id
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// Tile was processed in the frame whose parity matches this bit
        const UPDATED = 1 << 7;
    }
}

/// Built-in tile types
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Air = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Steam = 4,
    Fire = 5,
    Fuel = 6,
}

impl TileType {
    /// Every assigned tile type, in id order
    pub const ALL: [TileType; 7] = [
        TileType::Air,
        TileType::Sand,
        TileType::Water,
        TileType::Wood,
        TileType::Steam,
        TileType::Fire,
        TileType::Fuel,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Decode a type id. Unassigned ids (7-15) return `None`.
    pub const fn from_id(id: u8) -> Option<TileType> {
        match id {
            0 => Some(TileType::Air),
            1 => Some(TileType::Sand),
            2 => Some(TileType::Water),
            3 => Some(TileType::Wood),
            4 => Some(TileType::Steam),
            5 => Some(TileType::Fire),
            6 => Some(TileType::Fuel),
            _ => None,
        }
    }
}

/// Parity (0 or 1) of a simulation time
pub const fn get_time_parity(time: u64) -> u8 {
    (time & 1) as u8
}

/// A single grid cell, packed into one byte
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile(u8);

impl Tile {
    pub const AIR: Tile = Tile(0);

    /// A tile of the given type with the update flag cleared
    pub const fn new(tile_type: TileType) -> Self {
        Self(tile_type.id())
    }

    /// A tile of the given type already marked as processed at `time`.
    ///
    /// Used whenever a tile is written into the grid so it is not picked up
    /// again by the scan that is running at `time`.
    pub fn stamped(tile_type: TileType, time: u64) -> Self {
        let mut tile = Self::new(tile_type);
        tile.set_updated(time);
        tile
    }

    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Type id in `0..16`, which may be an unassigned id for raw tiles
    pub const fn type_id(self) -> u8 {
        self.0 & TYPE_MASK
    }

    pub const fn tile_type(self) -> Option<TileType> {
        TileType::from_id(self.type_id())
    }

    pub const fn is_empty(self) -> bool {
        self.type_id() == TileType::Air as u8
    }

    pub const fn flags(self) -> TileFlags {
        TileFlags::from_bits_truncate(self.0)
    }

    /// Whether this tile was already processed in the frame running at `time`
    pub fn is_updated(self, time: u64) -> bool {
        (self.0 >> 7) == get_time_parity(time)
    }

    /// Sync the update flag to the parity of `time`, leaving the type bits alone
    pub fn set_updated(&mut self, time: u64) {
        if get_time_parity(time) == 1 {
            self.0 |= TileFlags::UPDATED.bits();
        } else {
            self.0 &= !TileFlags::UPDATED.bits();
        }
    }
}

impl From<TileType> for Tile {
    fn from(tile_type: TileType) -> Self {
        Self::new(tile_type)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("type_id", &self.type_id())
            .field("flags", &self.flags())
            .finish()
    }
}
