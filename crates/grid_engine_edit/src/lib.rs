#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod brushes;
pub mod edits;
pub mod tools;

mod edit_state;
pub use edit_state::EditState;

mod image_operation;
pub use image_operation::{apply_image_operation, new_image_log, new_image_log_from, FloatingUpdate, ImageLog, ImageOperation, PixelChange};

mod session;
pub use session::ImageSession;

pub use edits::{create_edit, Edit};
pub use tools::Tool;

// Re-export the engine types tools work with
pub use grid_engine::{Bitmap, Bitmask, Color, EditorOptions, EngineError, LogOptions, OperationLog, Options, Position, Result, Size};
