use serde::{Deserialize, Serialize};

use super::{MapObject, MapQuadrant, MapRect, ObjectLayer, TileId};
use crate::Position;

/// Object layers of a map.
///
/// `Area` and `Terrain` are managed by the caller; [`MapData`] only stores
/// the first four.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Decoration,
    Item,
    Interactable,
    Spawner,
    Area,
    Terrain,
}

impl LayerKind {
    pub const OBJECT_LAYERS: [LayerKind; 4] = [LayerKind::Decoration, LayerKind::Item, LayerKind::Interactable, LayerKind::Spawner];

    fn index(self) -> Option<usize> {
        match self {
            LayerKind::Decoration => Some(0),
            LayerKind::Item => Some(1),
            LayerKind::Interactable => Some(2),
            LayerKind::Spawner => Some(3),
            LayerKind::Area | LayerKind::Terrain => None,
        }
    }
}

/// Unbounded tile map.
///
/// Tiles are split over four quadrants by the sign of the coordinates:
///
/// | column | row  | quadrant |
/// |--------|------|----------|
/// | >= 0   | >= 0 | NE       |
/// | < 0    | >= 0 | NW       |
/// | >= 0   | < 0  | SE       |
/// | < 0    | < 0  | SW       |
///
/// `bounds` grows with every tile written and is never recomputed, so it can
/// only get larger.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MapData {
    ne: MapQuadrant,
    nw: MapQuadrant,
    se: MapQuadrant,
    sw: MapQuadrant,

    layers: [ObjectLayer; 4],
    bounds: Option<MapRect>,
}

impl MapData {
    pub fn new() -> Self {
        Self::default()
    }

    fn quadrant(&self, col: i32, row: i32) -> &MapQuadrant {
        match (col < 0, row < 0) {
            (false, false) => &self.ne,
            (true, false) => &self.nw,
            (false, true) => &self.se,
            (true, true) => &self.sw,
        }
    }

    fn quadrant_mut(&mut self, col: i32, row: i32) -> &mut MapQuadrant {
        match (col < 0, row < 0) {
            (false, false) => &mut self.ne,
            (true, false) => &mut self.nw,
            (false, true) => &mut self.se,
            (true, true) => &mut self.sw,
        }
    }

    pub fn set_tile(&mut self, col: i32, row: i32, tile: TileId) {
        self.quadrant_mut(col, row).set_tile(col, row, Some(tile));
        self.expand_bounds(col, row);
    }

    /// Unsets a cell. The cell still counts towards the bounds.
    pub fn clear_tile(&mut self, col: i32, row: i32) {
        self.quadrant_mut(col, row).set_tile(col, row, None);
        self.expand_bounds(col, row);
    }

    /// Tile at `(col, row)`, `None` if it was never set or has been cleared.
    pub fn get_tile(&self, col: i32, row: i32) -> Option<TileId> {
        self.quadrant(col, row).get_tile(col, row)
    }

    /// Stamps a column-major block with its top-left corner at `(col, row)`.
    ///
    /// `block[c][r]` lands on `(col + c, row + r)`. Cells that would fall past
    /// the `i32` coordinate range are skipped. An empty block clears the
    /// single cell at `(col, row)`.
    pub fn set_tile_group(&mut self, col: i32, row: i32, block: &[Vec<TileId>]) {
        let height = block.first().map_or(0, Vec::len);
        if block.is_empty() || height == 0 {
            self.clear_tile(col, row);
            return;
        }

        for r in 0..height {
            let Some(target_row) = offset(row, r) else {
                break;
            };
            for (c, column) in block.iter().enumerate() {
                let Some(target_col) = offset(col, c) else {
                    break;
                };
                if let Some(tile) = column.get(r) {
                    self.set_tile(target_col, target_row, *tile);
                }
            }
        }
    }

    fn expand_bounds(&mut self, col: i32, row: i32) {
        let bounds = self.bounds.get_or_insert(MapRect::cell(col, row));
        bounds.top = bounds.top.min(row);
        bounds.bottom = bounds.bottom.max(row);
        bounds.left = bounds.left.min(col);
        bounds.right = bounds.right.max(col);
        bounds.width = bounds.right.saturating_sub(bounds.left).saturating_add(1);
        bounds.height = bounds.bottom.saturating_sub(bounds.top).saturating_add(1);
    }

    /// Smallest rectangle around every cell ever written, `None` for a fresh map.
    ///
    /// `width` and `height` saturate at `i32::MAX` for maps spanning the whole
    /// coordinate range.
    pub fn bounds(&self) -> Option<MapRect> {
        self.bounds
    }

    /// All set tiles, quadrant by quadrant (NE, NW, SE, SW).
    pub fn tiles(&self) -> Vec<(Position, TileId)> {
        // Local coordinates of negative quadrants reach 2^31, so sign them in i64.
        let signed = |quadrant: &MapQuadrant, sx: i64, sy: i64| {
            quadrant
                .tiles()
                .map(move |(c, r, tile)| (Position::new((sx * i64::from(c)) as i32, (sy * i64::from(r)) as i32), tile))
                .collect::<Vec<_>>()
        };
        let mut result = signed(&self.ne, 1, 1);
        result.extend(signed(&self.nw, -1, 1));
        result.extend(signed(&self.se, 1, -1));
        result.extend(signed(&self.sw, -1, -1));
        result
    }

    pub fn tile_count(&self) -> usize {
        self.ne.tile_count() + self.nw.tile_count() + self.se.tile_count() + self.sw.tile_count()
    }

    /// Adds an object to one of the map's layers.
    ///
    /// Returns `false` for the caller-managed area and terrain layers.
    pub fn add_object_to_layer(&mut self, layer: LayerKind, object: MapObject) -> bool {
        match self.layer_mut(layer) {
            Some(l) => {
                l.add_object(object);
                true
            }
            None => {
                log::warn!("layer {layer:?} is not stored in the map, object {} dropped", object.id());
                false
            }
        }
    }

    pub fn layer(&self, layer: LayerKind) -> Option<&ObjectLayer> {
        layer.index().map(|i| &self.layers[i])
    }

    pub fn layer_mut(&mut self, layer: LayerKind) -> Option<&mut ObjectLayer> {
        layer.index().map(|i| &mut self.layers[i])
    }

    pub fn layers(&self) -> &[ObjectLayer] {
        &self.layers
    }
}

/// `base + delta`, `None` past the `i32` range.
pub(crate) fn offset(base: i32, delta: usize) -> Option<i32> {
    i32::try_from(delta).ok().and_then(|d| base.checked_add(d))
}
