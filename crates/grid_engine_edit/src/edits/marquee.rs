use grid_engine::{Color, Position, Size};

use super::{DragState, Edit};
use crate::EditState;

/// Rectangular selection into the floating layer.
///
/// Dragging outside the floating layer cuts the dragged rectangle into a new
/// floating layer. Dragging inside it moves the layer. A click without drag
/// merges the layer back into the image.
pub struct MarqueeEdit {
    drag: DragState,
    is_move: bool,
    move_origin: Position,
}

impl MarqueeEdit {
    pub fn new(canvas: Size) -> Self {
        Self {
            drag: DragState::new(canvas, 0, 1),
            is_move: false,
            move_origin: Position::default(),
        }
    }

    pub fn is_move(&self) -> bool {
        self.is_move
    }
}

impl Edit for MarqueeEdit {
    fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.drag.base.begin_keep_layer(col, row);
        self.drag.end = self.drag.base.start;

        if state.floating_layer.is_some() {
            if state.in_floating_layer(col, row) {
                self.is_move = true;
                self.move_origin = state.layer_offset;
            } else {
                state.merge_floating_layer();
            }
        }
        log::trace!("marquee start at {} (move: {})", self.drag.base.start, self.is_move);
    }

    fn update(&mut self, col: i32, row: i32) {
        self.drag.update(col, row);
    }

    fn end(&mut self, _col: i32, _row: i32, state: &mut EditState) {
        if !self.drag.is_dragged {
            state.merge_floating_layer();
        }
    }

    fn is_started(&self) -> bool {
        self.drag.base.is_started
    }

    fn do_edit_core(&self, state: &mut EditState) {
        if !self.drag.is_dragged {
            return;
        }
        if self.is_move {
            state.layer_offset = self.move_origin + (self.drag.end - self.drag.base.start);
        } else {
            let (tl, br) = (self.drag.top_left(), self.drag.bottom_right());
            state.copy_to_layer(tl.x, tl.y, br.x - tl.x + 1, br.y - tl.y + 1, true);
        }
    }

    fn show_preview(&self) -> bool {
        false
    }

    fn color(&self) -> Color {
        0
    }
}
