//! Per-type particle rules
//!
//! A fixed, stateless table indexed by type id. Every id a tile can encode has
//! a row; ids without an assigned type resolve to an inert row.

use crate::tile::{TYPE_ID_COUNT, TYPE_MASK, Tile, TileType};

/// Behavior and presentation of one tile type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRules {
    pub name: &'static str,

    /// Falls and piles up
    pub has_gravity: bool,
    /// Acts as a floor or wall for other tiles
    pub is_solid: bool,
    /// Flows sideways when resting on support
    pub is_liquid: bool,
    /// Rises and disperses
    pub is_gas: bool,
    /// Mixes with other liquids instead of sinking through them
    pub dissolves: bool,
    /// Ignites flammable neighbors
    pub is_incendiary: bool,

    /// Chance per frame to catch fire next to an incendiary tile (0.0 = never)
    pub flammability: f32,
    /// Chance per frame to persist (1.0 = never decays)
    pub survival_chance: f32,

    /// Base color (RGBA)
    pub color: [u8; 4],
    /// Character used by text rendering
    pub glyph: char,
}

impl TileRules {
    const INERT: TileRules = TileRules {
        name: "unknown",
        has_gravity: false,
        is_solid: false,
        is_liquid: false,
        is_gas: false,
        dissolves: false,
        is_incendiary: false,
        flammability: 0.0,
        survival_chance: 1.0,
        color: [255, 0, 255, 255], // Magenta for missing types
        glyph: '?',
    };

    pub fn decays(&self) -> bool {
        self.survival_chance < 1.0
    }

    pub fn is_flammable(&self) -> bool {
        self.flammability > 0.0
    }
}

const AIR: TileRules = TileRules {
    name: "air",
    color: [0, 0, 0, 0],
    glyph: '-',
    ..TileRules::INERT
};

const SAND: TileRules = TileRules {
    name: "sand",
    has_gravity: true,
    is_solid: true,
    color: [194, 178, 128, 255],
    glyph: 'O',
    ..TileRules::INERT
};

const WATER: TileRules = TileRules {
    name: "water",
    has_gravity: true,
    is_liquid: true,
    color: [64, 164, 223, 200],
    glyph: '_',
    ..TileRules::INERT
};

const WOOD: TileRules = TileRules {
    name: "wood",
    is_solid: true,
    flammability: 0.6,
    color: [139, 90, 43, 255],
    glyph: '#',
    ..TileRules::INERT
};

const STEAM: TileRules = TileRules {
    name: "steam",
    is_gas: true,
    survival_chance: 0.95,
    color: [200, 200, 200, 100],
    glyph: '~',
    ..TileRules::INERT
};

const FIRE: TileRules = TileRules {
    name: "fire",
    is_gas: true,
    is_incendiary: true,
    survival_chance: 0.87,
    color: [255, 100, 0, 255],
    glyph: '^',
    ..TileRules::INERT
};

const FUEL: TileRules = TileRules {
    name: "fuel",
    has_gravity: true,
    is_liquid: true,
    dissolves: true,
    flammability: 0.75,
    color: [60, 40, 20, 255],
    glyph: '%',
    ..TileRules::INERT
};

static RULES: [TileRules; TYPE_ID_COUNT] = {
    let mut rules = [TileRules::INERT; TYPE_ID_COUNT];
    rules[TileType::Air as usize] = AIR;
    rules[TileType::Sand as usize] = SAND;
    rules[TileType::Water as usize] = WATER;
    rules[TileType::Wood as usize] = WOOD;
    rules[TileType::Steam as usize] = STEAM;
    rules[TileType::Fire as usize] = FIRE;
    rules[TileType::Fuel as usize] = FUEL;
    rules
};

/// Lookup into the static rules table
pub struct Materials;

impl Materials {
    /// Rules for a type id. Only the low four bits are considered.
    pub fn get(id: u8) -> &'static TileRules {
        &RULES[(id & TYPE_MASK) as usize]
    }

    pub fn of(tile_type: TileType) -> &'static TileRules {
        Self::get(tile_type.id())
    }

    pub fn of_tile(tile: Tile) -> &'static TileRules {
        Self::get(tile.type_id())
    }

    /// Get color for a type id
    pub fn get_color(id: u8) -> [u8; 4] {
        Self::get(id).color
    }
}
