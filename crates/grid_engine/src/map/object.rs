use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Position;

/// Inclusive rectangle in map coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl MapRect {
    /// Rectangle covering the single cell `(col, row)`.
    pub fn cell(col: i32, row: i32) -> Self {
        Self::from_min_size(col, row, 1, 1)
    }

    pub fn from_min_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(width - 1),
            bottom: top.saturating_add(height - 1),
            width,
            height,
        }
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.left <= col && col <= self.right && self.top <= row && row <= self.bottom
    }
}

/// Two rectangles overlap unless they are separated on one of the axes.
pub fn overlaps(a: &MapRect, b: &MapRect) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.left > b.right || a.right < b.left)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out object ids for one editing session.
///
/// Ids are unique and increase monotonically. The allocator belongs to the
/// session, not to the map state, so undo never hands out an id twice.
#[derive(Clone, Debug, Default)]
pub struct ObjectIdAllocator {
    next: u32,
}

impl ObjectIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }

    /// Makes sure future ids are larger than `id`, e.g. after loading a map.
    pub fn reserve_past(&mut self, id: ObjectId) {
        self.next = self.next.max(id.0 + 1);
    }
}

/// An object placed on one of the map's object layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapObject {
    id: ObjectId,
    pub column: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
    pub properties: BTreeMap<String, String>,
}

impl MapObject {
    pub fn new(ids: &mut ObjectIdAllocator, column: i32, row: i32) -> Self {
        Self {
            id: ids.next_id(),
            column,
            row,
            width: 1,
            height: 1,
            properties: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }

    pub fn set_location(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
    }

    pub fn left(&self) -> i32 {
        self.column
    }

    pub fn top(&self) -> i32 {
        self.row
    }

    pub fn right(&self) -> i32 {
        self.column.saturating_add(self.width - 1)
    }

    pub fn bottom(&self) -> i32 {
        self.row.saturating_add(self.height - 1)
    }

    pub fn rect(&self) -> MapRect {
        MapRect::from_min_size(self.column, self.row, self.width, self.height)
    }

    pub fn set_prop(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn remove_prop(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

pub const DEFAULT_AREA_COLOR: &str = "#00a1f2";

/// A sized, colored region. Areas live on the caller-managed area layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapArea {
    pub object: MapObject,
    pub primary_color: String,
    pub outline_color: String,
}

impl MapArea {
    pub fn new(ids: &mut ObjectIdAllocator, width: i32, height: i32) -> Self {
        let mut object = MapObject::new(ids, 0, 0);
        object.width = width;
        object.height = height;
        Self {
            object,
            primary_color: DEFAULT_AREA_COLOR.to_string(),
            outline_color: DEFAULT_AREA_COLOR.to_string(),
        }
    }

    pub fn set_colors(&mut self, primary: impl Into<String>, outline: impl Into<String>) {
        self.primary_color = primary.into();
        self.outline_color = outline.into();
    }

    /// Non-positive dimensions are ignored.
    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        if width > 0 {
            self.object.width = width;
        }
        if height > 0 {
            self.object.height = height;
        }
    }
}

/// Ordered collection of objects on one layer.
///
/// Lookups are linear scans; layers hold few objects.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLayer {
    objects: Vec<MapObject>,
}

impl ObjectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: MapObject) {
        self.objects.push(object);
    }

    /// Replaces the object with the same id in place, or appends it.
    pub fn replace_or_add(&mut self, object: MapObject) {
        match self.objects.iter_mut().find(|o| o.id == object.id) {
            Some(existing) => *existing = object,
            None => self.objects.push(object),
        }
    }

    pub fn remove_object_by_id(&mut self, id: ObjectId) -> Option<MapObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn object_by_id(&self, id: ObjectId) -> Option<&MapObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_by_id_mut(&mut self, id: ObjectId) -> Option<&mut MapObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    /// First object (in insertion order) whose rectangle covers the cell.
    pub fn object_on_tile(&self, col: i32, row: i32) -> Option<&MapObject> {
        let cell = MapRect::cell(col, row);
        self.objects.iter().find(|o| overlaps(&o.rect(), &cell))
    }
}
