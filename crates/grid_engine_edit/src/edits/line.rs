use grid_engine::{Color, Position, Size};

use super::{DragState, Edit};
use crate::{
    brushes::{brush_points, get_line_points},
    EditState,
};

/// Straight line from the drag start to the current point.
pub struct LineEdit {
    drag: DragState,
}

impl LineEdit {
    pub fn new(canvas: Size, color: Color, tool_width: i32) -> Self {
        Self {
            drag: DragState::new(canvas, color, tool_width),
        }
    }
}

impl Edit for LineEdit {
    fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.drag.start(col, row, state);
    }

    fn update(&mut self, col: i32, row: i32) {
        self.drag.update(col, row);
    }

    fn is_started(&self) -> bool {
        self.drag.base.is_started
    }

    // Brush cells past the canvas edge are dropped by the bitmap.
    fn do_edit_core(&self, state: &mut EditState) {
        let width = self.drag.base.tool_width;
        for p in get_line_points(self.drag.base.start, self.drag.end) {
            for b in brush_points(p, width) {
                state.image.set(b.x, b.y, self.drag.base.color);
            }
        }
    }

    fn draw_cursor(&self, col: i32, row: i32, plot: &mut dyn FnMut(i32, i32)) {
        for p in brush_points(Position::new(col, row), self.drag.base.tool_width) {
            plot(p.x, p.y);
        }
    }

    fn color(&self) -> Color {
        self.drag.base.color
    }
}
