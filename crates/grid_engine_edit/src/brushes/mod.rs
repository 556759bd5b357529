//! Rasterization algorithms used by the editing tools
//!
//! All functions here are pure: they return the cells to touch and leave
//! writing them to the caller, so they can be tested without any document.
//!
//! - Lines (Bresenham)
//! - Rectangles (filled, outline and thick outline rings)
//! - Circles (midpoint, 8-way symmetric)
//! - Flood fill (4-connected, explicit stack)
//! - Square brush stamps

pub mod circle;
pub mod fill;
pub mod line;
pub mod rectangle;

pub use circle::get_circle_points;
pub use fill::flood_fill_points;
pub use line::get_line_points;
pub use rectangle::{filled_rectangle_points, normalize_rectangle, rectangle_outline_points, thick_rectangle_outline_points};

use grid_engine::{Position, Size};

/// Cells of a square brush of side `width` around `center`.
///
/// Even widths lean towards the top-left: the square starts at
/// `center - floor(width / 2)`.
pub fn brush_points(center: Position, width: i32) -> impl Iterator<Item = Position> {
    let offset = width.div_euclid(2);
    let origin = Position::new(center.x - offset, center.y - offset);
    (0..width).flat_map(move |i| (0..width).map(move |j| Position::new(origin.x + i, origin.y + j)))
}

/// Like [`brush_points`], but only cells inside `canvas`.
pub fn clipped_brush_points(center: Position, width: i32, canvas: Size) -> impl Iterator<Item = Position> {
    brush_points(center, width).filter(move |p| canvas.contains(*p))
}
