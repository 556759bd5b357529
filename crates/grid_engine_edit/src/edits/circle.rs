use grid_engine::{Color, Size};

use super::{DragState, Edit};
use crate::{brushes::get_circle_points, EditState};

/// Circle outline around the drag start passing near the current point.
pub struct CircleEdit {
    drag: DragState,
}

impl CircleEdit {
    pub fn new(canvas: Size, color: Color) -> Self {
        Self {
            drag: DragState::new(canvas, color, 1),
        }
    }

    pub fn radius(&self) -> i32 {
        self.drag.top_left().distance(self.drag.bottom_right()).floor() as i32
    }
}

impl Edit for CircleEdit {
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
        for p in get_circle_points(self.drag.base.start, self.radius()) {
            state.image.set(p.x, p.y, self.drag.base.color);
        }
    }

    fn color(&self) -> Color {
        self.drag.base.color
    }
}
