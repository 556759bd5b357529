//! Rectangle drawing algorithms

use grid_engine::Position;

/// Orders two corners into `(top_left, bottom_right)`.
pub fn normalize_rectangle(p0: Position, p1: Position) -> (Position, Position) {
    (p0.min(p1), p0.max(p1))
}

/// All cells of the inclusive rectangle `tl..=br`.
pub fn filled_rectangle_points(tl: Position, br: Position) -> Vec<Position> {
    let mut points = Vec::new();
    for y in tl.y..=br.y {
        for x in tl.x..=br.x {
            points.push(Position::new(x, y));
        }
    }
    points
}

/// One-cell outline of `tl..=br`. Empty if the rectangle is inverted.
pub fn rectangle_outline_points(tl: Position, br: Position) -> Vec<Position> {
    let mut points = Vec::new();
    if tl.x > br.x || tl.y > br.y {
        return points;
    }

    for x in tl.x..=br.x {
        points.push(Position::new(x, tl.y));
        if br.y != tl.y {
            points.push(Position::new(x, br.y));
        }
    }
    for y in (tl.y + 1)..br.y {
        points.push(Position::new(tl.x, y));
        if br.x != tl.x {
            points.push(Position::new(br.x, y));
        }
    }
    points
}

/// Outline `width` cells thick.
///
/// The outermost ring lies `width >> 1` cells outside `tl..=br`; every
/// following ring is inset by one. Rings that invert are skipped.
pub fn thick_rectangle_outline_points(tl: Position, br: Position, width: i32) -> Vec<Position> {
    let grow = width >> 1;
    let tl = Position::new(tl.x - grow, tl.y - grow);
    let br = Position::new(br.x + grow, br.y + grow);

    let mut points = Vec::new();
    for i in 0..width {
        points.extend(rectangle_outline_points(Position::new(tl.x + i, tl.y + i), Position::new(br.x - i, br.y - i)));
    }
    points
}
