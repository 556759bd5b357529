use serde::{Deserialize, Serialize};

use grid_engine::{Bitmap, Color, LogOptions, OperationLog, Position, Size};

use crate::EditState;

/// New color of a single image cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelChange {
    pub col: i32,
    pub row: i32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatingUpdate {
    #[default]
    Unchanged,
    Set {
        layer: Bitmap,
        offset: Position,
    },
    Cleared,
}

/// Replayable edit of an [`EditState`], recorded once per finished gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOperation {
    pub pixels: Vec<PixelChange>,
    pub floating: FloatingUpdate,
}

impl ImageOperation {
    /// Operation turning `before` into `after`, `None` if they are equal.
    ///
    /// Both states must have the same image size; cells outside `before`
    /// are not recorded.
    pub fn diff(before: &EditState, after: &EditState) -> Option<ImageOperation> {
        let mut pixels = Vec::new();
        for row in 0..before.height() {
            for col in 0..before.width() {
                let color = after.image.get(col, row);
                if before.image.get(col, row) != color {
                    pixels.push(PixelChange { col, row, color });
                }
            }
        }

        let floating = match (&before.floating_layer, &after.floating_layer) {
            (None, None) => FloatingUpdate::Unchanged,
            (Some(a), Some(b)) if a == b && before.layer_offset == after.layer_offset => FloatingUpdate::Unchanged,
            (_, None) => FloatingUpdate::Cleared,
            (_, Some(layer)) => FloatingUpdate::Set {
                layer: layer.clone(),
                offset: after.layer_offset,
            },
        };

        if pixels.is_empty() && floating == FloatingUpdate::Unchanged {
            return None;
        }
        Some(ImageOperation { pixels, floating })
    }

    pub fn description(&self) -> String {
        match &self.floating {
            FloatingUpdate::Unchanged => format!("Change {} pixels", self.pixels.len()),
            FloatingUpdate::Set { .. } => "Update selection".to_string(),
            FloatingUpdate::Cleared => "Merge selection".to_string(),
        }
    }
}

pub fn apply_image_operation(state: &mut EditState, op: &ImageOperation) {
    for change in &op.pixels {
        state.image.set(change.col, change.row, change.color);
    }
    match &op.floating {
        FloatingUpdate::Unchanged => {}
        FloatingUpdate::Set { layer, offset } => {
            state.floating_layer = Some(layer.clone());
            state.layer_offset = *offset;
        }
        FloatingUpdate::Cleared => state.floating_layer = None,
    }
}

pub type ImageLog = OperationLog<EditState, ImageOperation>;

/// Operation log over a blank image of `size`.
pub fn new_image_log(size: Size, options: LogOptions) -> ImageLog {
    OperationLog::with_options(options, move || EditState::new(Bitmap::new(size)), apply_image_operation)
}

/// Operation log whose history starts at an existing document.
pub fn new_image_log_from(initial: EditState, options: LogOptions) -> ImageLog {
    OperationLog::with_options(options, move || initial.clone(), apply_image_operation)
}
