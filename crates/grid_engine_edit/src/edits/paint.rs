use grid_engine::{Bitmask, Color, Position, Size};

use super::{Edit, EditBase};
use crate::{
    brushes::{clipped_brush_points, get_line_points},
    EditState,
};

/// Freehand painting (and erasing, with color 0).
///
/// Samples are joined by lines so fast pointer movement leaves no gaps.
/// Covered cells collect in a mask and are written in one go by `do_edit`.
pub struct PaintEdit {
    base: EditBase,
    mask: Bitmask,
    last: Position,
}

impl PaintEdit {
    pub fn new(canvas: Size, color: Color, tool_width: i32) -> Self {
        Self {
            base: EditBase::new(canvas, color, tool_width),
            mask: Bitmask::new(canvas),
            last: Position::default(),
        }
    }

    fn stamp(&mut self, center: Position) {
        for p in clipped_brush_points(center, self.base.tool_width, self.base.canvas) {
            self.mask.set(p);
        }
    }

    /// Cells painted so far.
    pub fn mask(&self) -> &Bitmask {
        &self.mask
    }
}

impl Edit for PaintEdit {
    fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.base.begin(col, row, state);
        self.last = self.base.start;
        self.stamp(self.last);
        log::trace!("paint start at {}", self.last);
    }

    fn update(&mut self, col: i32, row: i32) {
        if !self.base.is_started {
            return;
        }
        let next = Position::new(col, row);
        for p in get_line_points(self.last, next) {
            self.stamp(p);
        }
        self.last = next;
    }

    fn is_started(&self) -> bool {
        self.base.is_started
    }

    fn do_edit_core(&self, state: &mut EditState) {
        for p in self.mask.positions() {
            state.image.set(p.x, p.y, self.base.color);
        }
    }

    fn draw_cursor(&self, col: i32, row: i32, plot: &mut dyn FnMut(i32, i32)) {
        for p in clipped_brush_points(Position::new(col, row), self.base.tool_width, self.base.canvas) {
            plot(p.x, p.y);
        }
    }

    fn color(&self) -> Color {
        self.base.color
    }
}
