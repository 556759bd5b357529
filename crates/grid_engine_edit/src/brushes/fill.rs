//! Flood fill algorithm

use grid_engine::{Bitmask, Position, Size};

/// Cells 4-connected to `start` that share its value.
///
/// Uses an explicit stack and a visited mask, so large regions can't
/// overflow the call stack and no cell is queued twice. Returns nothing if
/// `start` lies outside `size`.
pub fn flood_fill_points<T, F>(start: Position, size: Size, get_pixel: F) -> Vec<Position>
where
    T: PartialEq,
    F: Fn(Position) -> T,
{
    let mut result = Vec::new();
    if !size.contains(start) {
        return result;
    }

    let target = get_pixel(start);
    let mut visited = Bitmask::new(size);
    visited.set(start);
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if get_pixel(pos) != target {
            continue;
        }
        result.push(pos);
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if size.contains(next) && !visited.is_set(next) {
                visited.set(next);
                stack.push(next);
            }
        }
    }

    result
}
