//! Sparse tile map and object layers
//!
//! - [`MapData`] - quadrant partitioned tile storage with bounds tracking
//! - [`ObjectLayer`] / [`MapObject`] - per-layer object collections
//! - [`MapOperation`] - replayable map edits for the [`crate::OperationLog`]

mod map_data;
mod object;
mod operation;
mod quadrant;

pub use map_data::{LayerKind, MapData};
pub use object::{overlaps, MapArea, MapObject, MapRect, ObjectId, ObjectIdAllocator, ObjectLayer, DEFAULT_AREA_COLOR};
pub use operation::{apply_map_operation, new_map_log, MapLog, MapOperation};
pub use quadrant::MapQuadrant;

/// Tile id stored in a map cell.
pub type TileId = u32;
