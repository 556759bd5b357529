//! Line drawing algorithm
//!
//! Steps along x and covers the vertical run of every column, so steep lines
//! are drawn as stacked column segments.

use grid_engine::Position;

/// Generate all points on a line from p0 to p1
///
/// Points are ordered from `p0` to `p1`, both endpoints included, and each
/// cell appears once. Each column advances the row by `|dy| / |dx|`; a row
/// step happens whenever the accumulated error reaches one half. The error
/// is kept in integer units of `1 / (2 * |dx|)`, so ties are exact.
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if dx == 0 {
        let step = if dy >= 0 { 1 } else { -1 };
        return (0..=dy.abs()).map(|i| Position::new(p0.x, p0.y + i * step)).collect();
    }

    let x_step = if dx > 0 { 1 } else { -1 };
    let y_step = if dy > 0 { 1 } else { -1 };
    let (adx, ady) = (i64::from(dx.abs()), i64::from(dy.abs()));

    let mut points = Vec::new();
    let mut push = |p: Position| {
        if points.last() != Some(&p) {
            points.push(p);
        }
    };

    let mut err = 0i64;
    let mut x = p0.x;
    let mut y = p0.y;
    loop {
        push(Position::new(x, y));
        err += ady;
        while 2 * err >= adx {
            let before_end = if y_step > 0 { y <= p1.y } else { y >= p1.y };
            if before_end {
                push(Position::new(x, y));
            }
            y += y_step;
            err -= adx;
        }
        if x == p1.x {
            break;
        }
        x += x_step;
    }

    points
}
