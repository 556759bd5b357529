//! Gesture-driven editing tools
//!
//! Every tool is an [`Edit`] that lives for one pointer gesture:
//! `start` on pointer down, `update` for every move, `end` on pointer up.
//! [`Edit::do_edit`] then applies the gesture to a working [`EditState`].
//! Edits never record history; the caller diffs states into operations.

mod circle;
mod fill;
mod line;
mod marquee;
mod paint;
mod rectangle;

pub use circle::CircleEdit;
pub use fill::FillEdit;
pub use line::LineEdit;
pub use marquee::MarqueeEdit;
pub use paint::PaintEdit;
pub use rectangle::RectangleEdit;

use grid_engine::{Color, Position, Size};

use crate::{EditState, Tool};

pub trait Edit {
    /// Begins the gesture at `(col, row)`.
    ///
    /// Tools other than the marquee merge a pending floating layer here.
    fn start(&mut self, col: i32, row: i32, state: &mut EditState);

    /// Pointer moved while the gesture is active. Ignored before `start`.
    fn update(&mut self, col: i32, row: i32);

    fn end(&mut self, _col: i32, _row: i32, _state: &mut EditState) {}

    fn is_started(&self) -> bool;

    fn do_edit_core(&self, state: &mut EditState);

    /// Applies the gesture. Does nothing before `start`.
    fn do_edit(&self, state: &mut EditState) {
        if self.is_started() {
            self.do_edit_core(state);
        }
    }

    /// Plots the cells the tool would touch at the hovered cell.
    fn draw_cursor(&self, col: i32, row: i32, plot: &mut dyn FnMut(i32, i32)) {
        plot(col, row);
    }

    /// Whether hosts should render `do_edit` into a preview while dragging.
    fn show_preview(&self) -> bool {
        true
    }

    fn color(&self) -> Color;
}

/// State every tool shares.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EditBase {
    pub canvas: Size,
    pub color: Color,
    pub tool_width: i32,
    pub start: Position,
    pub is_started: bool,
}

impl EditBase {
    pub fn new(canvas: Size, color: Color, tool_width: i32) -> Self {
        Self {
            canvas,
            color,
            tool_width,
            start: Position::default(),
            is_started: false,
        }
    }

    /// Marks the gesture as started and merges any floating layer.
    pub fn begin(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.begin_keep_layer(col, row);
        state.merge_floating_layer();
    }

    pub fn begin_keep_layer(&mut self, col: i32, row: i32) {
        self.start = Position::new(col, row);
        self.is_started = true;
    }
}

/// Start/end pair of drag tools.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragState {
    pub base: EditBase,
    pub end: Position,
    pub is_dragged: bool,
}

impl DragState {
    pub fn new(canvas: Size, color: Color, tool_width: i32) -> Self {
        Self {
            base: EditBase::new(canvas, color, tool_width),
            end: Position::default(),
            is_dragged: false,
        }
    }

    pub fn start(&mut self, col: i32, row: i32, state: &mut EditState) {
        self.base.begin(col, row, state);
        self.end = self.base.start;
    }

    /// Moves the end point. The gesture counts as a drag once the pointer
    /// has left the start cell, and stays one after returning to it.
    pub fn update(&mut self, col: i32, row: i32) {
        if !self.base.is_started {
            return;
        }
        self.end = Position::new(col, row);
        if self.end != self.base.start {
            self.is_dragged = true;
        }
    }

    pub fn top_left(&self) -> Position {
        self.base.start.min(self.end)
    }

    pub fn bottom_right(&self) -> Position {
        self.base.start.max(self.end)
    }
}

/// Creates the edit for one gesture of `tool`.
///
/// Returns `None` for [`Tool::ColorSelect`], which only reads the canvas.
/// Tool widths below 1 are raised to 1.
pub fn create_edit(tool: Tool, canvas: Size, color: Color, tool_width: i32) -> Option<Box<dyn Edit>> {
    let tool_width = tool_width.max(1);
    let edit: Box<dyn Edit> = match tool {
        Tool::Paint => Box::new(PaintEdit::new(canvas, color, tool_width)),
        Tool::Erase => Box::new(PaintEdit::new(canvas, 0, tool_width)),
        Tool::Rect => Box::new(RectangleEdit::outline(canvas, color, tool_width)),
        Tool::FilledRect => Box::new(RectangleEdit::filled(canvas, color)),
        Tool::Line => Box::new(LineEdit::new(canvas, color, tool_width)),
        Tool::Circle => Box::new(CircleEdit::new(canvas, color)),
        Tool::Fill => Box::new(FillEdit::new(canvas, color)),
        Tool::Marquee => Box::new(MarqueeEdit::new(canvas)),
        Tool::ColorSelect => return None,
    };
    Some(edit)
}
