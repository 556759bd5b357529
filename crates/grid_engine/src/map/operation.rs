use serde::{Deserialize, Serialize};

use super::{map_data::offset, LayerKind, MapData, MapObject, TileId};
use crate::{Bitmask, LogOptions, OperationLog};

/// Replayable edit of a [`MapData`].
///
/// Every variant carries all data it needs, so applying it to equal maps
/// always gives equal results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapOperation {
    /// Stamp a column-major tile block at `(column, row)`; an empty block clears the cell.
    SetTile {
        column: i32,
        row: i32,
        selected_tiles: Vec<Vec<TileId>>,
    },

    /// Stamp the tile block repeatedly over every cell set in `bitmask`.
    ///
    /// Bitmask cell `(x, y)` maps to map cell `(column + x, row + y)` and takes
    /// `selected_tiles[x % w][y % h]`. An empty block clears the covered cells.
    SetMultiTile {
        column: i32,
        row: i32,
        bitmask: Bitmask,
        selected_tiles: Vec<Vec<TileId>>,
    },

    /// Insert the object, or replace the object with the same id.
    SetObject { object: MapObject, layer: LayerKind },
}

impl MapOperation {
    pub fn description(&self) -> String {
        match self {
            MapOperation::SetTile { selected_tiles, .. } if selected_tiles.is_empty() => "Clear tile".to_string(),
            MapOperation::SetTile { .. } => "Set tile".to_string(),
            MapOperation::SetMultiTile { .. } => "Paint tiles".to_string(),
            MapOperation::SetObject { layer, .. } => format!("Set {layer:?} object"),
        }
    }
}

pub fn apply_map_operation(map: &mut MapData, op: &MapOperation) {
    match op {
        MapOperation::SetTile { column, row, selected_tiles } => {
            map.set_tile_group(*column, *row, selected_tiles);
        }
        MapOperation::SetMultiTile {
            column,
            row,
            bitmask,
            selected_tiles,
        } => {
            let width = selected_tiles.len();
            let height = selected_tiles.first().map_or(0, Vec::len);
            for pos in bitmask.positions() {
                let (Some(col), Some(r)) = (offset(*column, pos.x as usize), offset(*row, pos.y as usize)) else {
                    continue;
                };
                if width == 0 || height == 0 {
                    map.clear_tile(col, r);
                    continue;
                }
                let tile = selected_tiles[pos.x as usize % width].get(pos.y as usize % height);
                match tile {
                    Some(tile) => map.set_tile(col, r, *tile),
                    None => map.clear_tile(col, r),
                }
            }
        }
        MapOperation::SetObject { object, layer } => match map.layer_mut(*layer) {
            Some(l) => l.replace_or_add(object.clone()),
            None => log::warn!("ignoring object {} for caller managed layer {layer:?}", object.id()),
        },
    }
}

pub type MapLog = OperationLog<MapData, MapOperation>;

/// Operation log over an initially empty map.
pub fn new_map_log(options: LogOptions) -> MapLog {
    OperationLog::with_options(options, MapData::new, apply_map_operation)
}
