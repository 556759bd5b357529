use grid_engine::{Bitmap, Color, EngineError, Options, Position, Result, Size};

use crate::{create_edit, new_image_log_from, Edit, EditState, ImageLog, ImageOperation, Tool};

struct Gesture {
    edit: Box<dyn Edit>,
    before: EditState,
    working: EditState,
}

/// One bitmap editing session.
///
/// Owns the history of the document and the active tool settings. At most
/// one gesture runs at a time; each finished gesture becomes exactly one
/// [`ImageOperation`] in the log, or none if it changed nothing.
pub struct ImageSession {
    log: ImageLog,
    tool: Tool,
    color: Color,
    tool_width: i32,
    gesture: Option<Gesture>,
}

impl ImageSession {
    /// Session over a blank image.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] unless both dimensions are positive.
    pub fn new(size: Size, options: &Options) -> Result<Self> {
        if size.width <= 0 || size.height <= 0 {
            return Err(EngineError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::with_image(Bitmap::new(size), options))
    }

    /// Session whose history starts at `image`.
    pub fn with_image(image: Bitmap, options: &Options) -> Self {
        Self {
            log: new_image_log_from(EditState::new(image), options.log),
            tool: Tool::default(),
            color: options.editor.default_color,
            tool_width: options.editor.default_tool_width,
            gesture: None,
        }
    }

    pub fn state(&self) -> &EditState {
        self.log.current_state()
    }

    pub fn log(&self) -> &ImageLog {
        &self.log
    }

    pub fn size(&self) -> Size {
        self.state().size()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switching tools does not affect a running gesture.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn tool_width(&self) -> i32 {
        self.tool_width
    }

    pub fn set_tool_width(&mut self, width: i32) {
        self.tool_width = width.max(1);
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Starts a gesture with the current tool.
    ///
    /// The color-select tool takes the visible color under the pointer
    /// instead. A gesture still running is abandoned.
    pub fn pointer_down(&mut self, col: i32, row: i32) {
        if self.gesture.take().is_some() {
            log::warn!("pointer down at ({col}, {row}) while a gesture is active, dropping it");
        }

        let Some(mut edit) = create_edit(self.tool, self.size(), self.color, self.tool_width) else {
            self.color = self.state().color_at(col, row);
            log::trace!("picked color {} at ({col}, {row})", self.color);
            return;
        };

        let before = self.state().clone();
        let mut working = before.clone();
        edit.start(col, row, &mut working);
        log::trace!("{} gesture started at ({col}, {row})", self.tool.name());
        self.gesture = Some(Gesture { edit, before, working });
    }

    pub fn pointer_move(&mut self, col: i32, row: i32) {
        if let Some(gesture) = &mut self.gesture {
            gesture.edit.update(col, row);
        }
    }

    /// Finishes the gesture and records its effect.
    ///
    /// The release point is not sampled; hosts report it with
    /// [`ImageSession::pointer_move`] first. Returns `true` if an operation
    /// was added to the history.
    pub fn pointer_up(&mut self, col: i32, row: i32) -> bool {
        let Some(mut gesture) = self.gesture.take() else {
            return false;
        };
        gesture.edit.end(col, row, &mut gesture.working);
        gesture.edit.do_edit(&mut gesture.working);

        match ImageOperation::diff(&gesture.before, &gesture.working) {
            Some(op) => {
                log::debug!("{}: {}", self.tool.name(), op.description());
                self.log.do_operation(op);
                true
            }
            None => {
                log::trace!("{} gesture changed nothing", self.tool.name());
                false
            }
        }
    }

    /// Drops the running gesture without recording anything.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// The document as it would look if the gesture ended now.
    ///
    /// Tools without a live preview show the document before the drag.
    pub fn preview(&self) -> EditState {
        match &self.gesture {
            Some(gesture) => {
                let mut preview = gesture.working.clone();
                if gesture.edit.show_preview() {
                    gesture.edit.do_edit(&mut preview);
                }
                preview
            }
            None => self.state().clone(),
        }
    }

    /// Cells the current tool's cursor covers at `(col, row)`.
    pub fn cursor_cells(&self, col: i32, row: i32) -> Vec<Position> {
        let mut cells = Vec::new();
        match create_edit(self.tool, self.size(), self.color, self.tool_width) {
            Some(edit) => edit.draw_cursor(col, row, &mut |x, y| cells.push(Position::new(x, y))),
            None => cells.push(Position::new(col, row)),
        }
        cells
    }

    /// Undoes the last gesture. A running gesture is abandoned first.
    pub fn undo(&mut self) -> bool {
        self.gesture = None;
        self.log.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.gesture = None;
        self.log.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn add_change_listener(&mut self, listener: impl FnMut(&EditState) + 'static) {
        self.log.add_change_listener(listener);
    }
}
