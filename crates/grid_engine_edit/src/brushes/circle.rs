//! Circle drawing algorithm

use grid_engine::Position;

/// Outline of a circle around `center` using the midpoint algorithm.
///
/// The first octant starts at `x = radius - 1`, so a circle of radius `r`
/// spans `2r - 1` cells. Radius 0 yields no points. Cells may repeat where
/// octants meet.
pub fn get_circle_points(center: Position, radius: i32) -> Vec<Position> {
    let mut points = Vec::new();

    let mut x = radius - 1;
    let mut y = 0;
    let mut dx = 1;
    let mut dy = 1;
    let mut err = dx - radius * 2;

    while x >= y {
        for (px, py) in [(x, y), (x, -y), (y, x), (y, -x), (-y, x), (-y, -x), (-x, y), (-x, -y)] {
            points.push(Position::new(center.x + px, center.y + py));
        }

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }
        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - radius * 2;
        }
    }

    points
}
