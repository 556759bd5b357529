use serde::{Deserialize, Serialize};

use crate::{Position, Size};

/// Fixed-size coverage mask.
///
/// Used for brush stroke accumulation, flood fill visited sets and
/// multi-tile stamping. Out-of-range reads are `false`, out-of-range writes
/// are ignored.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmask {
    size: Size,
    bits: Vec<bool>,
}

impl Bitmask {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self {
            size,
            bits: vec![false; size.area()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.size.contains(pos) {
            Some(pos.y as usize * self.size.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    pub fn is_set(&self, pos: impl Into<Position>) -> bool {
        self.index(pos.into()).is_some_and(|i| self.bits[i])
    }

    pub fn set(&mut self, pos: impl Into<Position>) {
        self.set_is_set(pos, true);
    }

    pub fn set_is_set(&mut self, pos: impl Into<Position>, value: bool) {
        if let Some(i) = self.index(pos.into()) {
            self.bits[i] = value;
        }
    }

    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.contains(&true)
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// All set positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.size.width.max(1) as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| Position::new((i % width) as i32, (i / width) as i32))
    }
}
