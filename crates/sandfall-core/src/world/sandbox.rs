//! Sandbox - owns the tile grid and exposes the editing API

use std::fmt;

use sandfall_simulation::{Materials, TYPE_ID_COUNT, Tile, TileType};

use super::SandboxError;

/// A grid coordinate, row 0 being the top of the sandbox
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SandboxPoint {
    pub row: usize,
    pub col: usize,
}

impl SandboxPoint {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta. Returns `None` if either coordinate would go
    /// below zero; the upper bound is checked by the sandbox.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for SandboxPoint {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Count of tiles per type id
pub type TileCensus = [usize; TYPE_ID_COUNT];

/// A fixed-size 2D grid of tiles
pub struct Sandbox {
    /// Row-major tiles, `height * width` long
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    /// Frames processed so far. Its parity drives the update flag.
    lifetime: u64,
}

impl Sandbox {
    /// Create an all-air sandbox of `width` columns by `height` rows
    pub fn create_sandbox(width: usize, height: usize) -> Result<Self, SandboxError> {
        if width == 0 || height == 0 {
            return Err(SandboxError::InvalidDimensions { width, height });
        }

        let area = width
            .checked_mul(height)
            .ok_or(SandboxError::DimensionsOverflow { width, height })?;

        let mut tiles = Vec::new();
        tiles.try_reserve_exact(area)?;
        tiles.resize(area, Tile::AIR);

        log::debug!("Created {}x{} sandbox ({} tiles)", width, height, area);

        Ok(Self {
            tiles,
            width,
            height,
            lifetime: 0,
        })
    }

    pub fn new(width: usize, height: usize) -> Result<Self, SandboxError> {
        Self::create_sandbox(width, height)
    }

    /// Release the grid. Consuming `self` guarantees this runs once.
    pub fn sandbox_free(self) {
        log::debug!(
            "Freeing {}x{} sandbox after {} frames",
            self.width,
            self.height,
            self.lifetime
        );
        drop(self);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames processed so far
    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    pub fn is_coord_oob(&self, point: SandboxPoint) -> bool {
        point.row >= self.height || point.col >= self.width
    }

    /// Tile at `point`, or `None` outside the grid
    pub fn tile(&self, point: SandboxPoint) -> Option<Tile> {
        if self.is_coord_oob(point) {
            return None;
        }
        Some(self.tiles[self.index(point)])
    }

    /// Type id at `point`, or `None` outside the grid
    pub fn tile_type_id(&self, point: SandboxPoint) -> Option<u8> {
        self.tile(point).map(Tile::type_id)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// One row of tiles. Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.width;
        &self.tiles[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(self.width)
    }

    /// Place a tile into an empty cell. Occupied cells are left alone.
    pub fn place_tile(&mut self, point: SandboxPoint, tile_type: TileType) {
        if !self.check_edit(point, "place_tile") {
            return;
        }
        if !self.tiles[self.index(point)].is_empty() {
            return;
        }
        self.create_tile(point, tile_type);
    }

    /// Clear a cell back to air
    pub fn delete_tile(&mut self, point: SandboxPoint) {
        if !self.check_edit(point, "delete_tile") {
            return;
        }
        let index = self.index(point);
        if self.tiles[index].is_empty() {
            return;
        }
        log::trace!("[DELETE] ({}, {})", point.row, point.col);
        self.tiles[index] = Tile::AIR;
    }

    /// Overwrite a cell unless it already holds `tile_type`
    pub fn replace_tile(&mut self, point: SandboxPoint, tile_type: TileType) {
        if !self.check_edit(point, "replace_tile") {
            return;
        }
        if self.tiles[self.index(point)].type_id() == tile_type.id() {
            return;
        }
        self.create_tile(point, tile_type);
    }

    /// Unconditionally write a freshly stamped tile.
    ///
    /// Between frames the stamp belongs to the last completed frame, so the
    /// new tile takes part in the next `process_sandbox` call.
    pub fn create_tile(&mut self, point: SandboxPoint, tile_type: TileType) {
        if !self.check_edit(point, "create_tile") {
            return;
        }
        let index = self.index(point);
        let old = self.tiles[index];
        self.tiles[index] = Tile::stamped(tile_type, self.lifetime.wrapping_sub(1));

        log::trace!(
            "[MODIFY] ({}, {}) set to {} (was {})",
            point.row,
            point.col,
            Materials::of(tile_type).name,
            Materials::of_tile(old).name
        );
    }

    /// Number of tiles of one type
    pub fn count_tiles(&self, tile_type: TileType) -> usize {
        self.census()[tile_type as usize]
    }

    /// Number of tiles per type id, air included
    pub fn census(&self) -> TileCensus {
        let mut census = [0; TYPE_ID_COUNT];
        for tile in &self.tiles {
            census[tile.type_id() as usize] += 1;
        }
        census
    }

    // ----- crate-internal access for the scheduler and movement rules -----

    pub(crate) fn index(&self, point: SandboxPoint) -> usize {
        point.row * self.width + point.col
    }

    /// Neighbor of `point` shifted by the delta, if it lies in the grid
    pub(crate) fn neighbor(
        &self,
        point: SandboxPoint,
        d_row: isize,
        d_col: isize,
    ) -> Option<SandboxPoint> {
        point
            .offset(d_row, d_col)
            .filter(|&target| !self.is_coord_oob(target))
    }

    /// Tile at an in-bounds point
    pub(crate) fn at(&self, point: SandboxPoint) -> Tile {
        self.tiles[self.index(point)]
    }

    pub(crate) fn at_mut(&mut self, point: SandboxPoint) -> &mut Tile {
        let index = self.index(point);
        &mut self.tiles[index]
    }

    pub(crate) fn set(&mut self, point: SandboxPoint, tile: Tile) {
        let index = self.index(point);
        self.tiles[index] = tile;
    }

    pub(crate) fn swap_tiles(&mut self, a: SandboxPoint, b: SandboxPoint) {
        let (a, b) = (self.index(a), self.index(b));
        self.tiles.swap(a, b);
    }

    pub(crate) fn advance_lifetime(&mut self) {
        self.lifetime = self.lifetime.wrapping_add(1);
    }

    fn check_edit(&self, point: SandboxPoint, operation: &str) -> bool {
        if self.is_coord_oob(point) {
            log::warn!(
                "{}: ({}, {}) outside {}x{} sandbox",
                operation,
                point.row,
                point.col,
                self.width,
                self.height
            );
            return false;
        }
        true
    }
}

impl fmt::Debug for Sandbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sandbox")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// Text rendering: one glyph per tile, one line per row
impl fmt::Display for Sandbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", Materials::of_tile(*tile).glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
