use std::collections::BTreeMap;

use super::TileId;

/// Sparse storage for one sign combination of the map plane.
///
/// Keys are the absolute values of the signed map coordinates, so every
/// quadrant only ever sees non-negative indices. Only set cells are stored;
/// memory does not depend on how far a tile is from the origin.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MapQuadrant {
    cells: BTreeMap<(u32, u32), TileId>,
}

impl MapQuadrant {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(col: i32, row: i32) -> (u32, u32) {
        (col.unsigned_abs(), row.unsigned_abs())
    }

    /// Sets or, with `None`, removes a cell.
    pub fn set_tile(&mut self, col: i32, row: i32, tile: Option<TileId>) {
        let key = Self::key(col, row);
        match tile {
            Some(tile) => {
                self.cells.insert(key, tile);
            }
            None => {
                self.cells.remove(&key);
            }
        }
    }

    pub fn get_tile(&self, col: i32, row: i32) -> Option<TileId> {
        self.cells.get(&Self::key(col, row)).copied()
    }

    /// All set cells as `(local column, local row, tile)`, column-major.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, TileId)> + '_ {
        self.cells.iter().map(|(&(c, r), &tile)| (c, r, tile))
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }
}
