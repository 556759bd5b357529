use grid_engine::{Color, Position, Size};

use super::{Edit, EditBase};
use crate::{brushes::flood_fill_points, EditState};

/// Flood fill of the region under the pointer.
///
/// The target follows the pointer until release; the fill happens in `do_edit`.
pub struct FillEdit {
    base: EditBase,
    target: Position,
}

impl FillEdit {
    pub fn new(canvas: Size, color: Color) -> Self {
        Self {
            base: EditBase::new(canvas, color, 1),
            target: Position::default(),
        }
    }
}

impl Edit for FillEdit {
    fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.base.begin(col, row, state);
        self.target = self.base.start;
    }

    fn update(&mut self, col: i32, row: i32) {
        if self.base.is_started {
            self.target = Position::new(col, row);
        }
    }

    fn is_started(&self) -> bool {
        self.base.is_started
    }

    fn do_edit_core(&self, state: &mut EditState) {
        let image = &state.image;
        if !image.size().contains(self.target) || image.get(self.target.x, self.target.y) == self.base.color {
            return;
        }
        let points = flood_fill_points(self.target, image.size(), |p| image.get(p.x, p.y));
        log::trace!("filling {} cells from {}", points.len(), self.target);
        for p in points {
            state.image.set(p.x, p.y, self.base.color);
        }
    }

    fn color(&self) -> Color {
        self.base.color
    }
}
