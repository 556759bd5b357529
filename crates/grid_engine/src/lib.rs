#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
mod position;
pub use position::*;

mod error;
pub use error::{EngineError, Result};

mod bitmask;
pub use bitmask::*;

mod bitmap;
pub use bitmap::*;

mod options;
pub use options::*;

pub mod op_log;
pub use op_log::OperationLog;

pub mod map;
