use grid_engine::{Color, Position, Size};

use super::{DragState, Edit};
use crate::{
    brushes::{clipped_brush_points, filled_rectangle_points, thick_rectangle_outline_points},
    EditState,
};

/// Rectangle spanned by the drag, outlined or filled.
pub struct RectangleEdit {
    drag: DragState,
    filled: bool,
}

impl RectangleEdit {
    /// Outline `tool_width` cells thick, centered on the dragged border.
    pub fn outline(canvas: Size, color: Color, tool_width: i32) -> Self {
        Self {
            drag: DragState::new(canvas, color, tool_width),
            filled: false,
        }
    }

    pub fn filled(canvas: Size, color: Color) -> Self {
        Self {
            drag: DragState::new(canvas, color, 1),
            filled: true,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }
}

impl Edit for RectangleEdit {
    fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.drag.start(col, row, state);
    }

    fn update(&mut self, col: i32, row: i32) {
        self.drag.update(col, row);
    }

    fn is_started(&self) -> bool {
        self.drag.base.is_started
    }

    fn do_edit_core(&self, state: &mut EditState) {
        let (tl, br) = (self.drag.top_left(), self.drag.bottom_right());
        let points = if self.filled {
            filled_rectangle_points(tl, br)
        } else {
            thick_rectangle_outline_points(tl, br, self.drag.base.tool_width)
        };
        for p in points {
            state.image.set(p.x, p.y, self.drag.base.color);
        }
    }

    fn draw_cursor(&self, col: i32, row: i32, plot: &mut dyn FnMut(i32, i32)) {
        if self.filled {
            plot(col, row);
            return;
        }
        let base = &self.drag.base;
        for p in clipped_brush_points(Position::new(col, row), base.tool_width, base.canvas) {
            plot(p.x, p.y);
        }
    }

    fn color(&self) -> Color {
        self.drag.base.color
    }
}
