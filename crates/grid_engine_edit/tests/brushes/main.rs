//! Rasterization properties over many inputs

use grid_engine_edit::{
    brushes::{filled_rectangle_points, flood_fill_points, get_circle_points, get_line_points, thick_rectangle_outline_points},
    Position, Size,
};

#[test]
fn test_lines_are_connected() {
    for (x, y) in [(7, 0), (7, 3), (3, 7), (0, 7), (-5, 2), (-2, -6), (4, -4)] {
        let points = get_line_points(Position::new(0, 0), Position::new(x, y));
        assert_eq!(points.len() as i32, x.abs().max(y.abs()) + 1, "({x}, {y})");
        assert_eq!(points.last(), Some(&Position::new(x, y)));
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1 && (pair[1].y - pair[0].y).abs() <= 1);
        }
    }
}

#[test]
fn test_circle_points_near_radius() {
    let center = Position::new(0, 0);
    for radius in 2..12 {
        for p in get_circle_points(center, radius) {
            let d = center.distance(p);
            assert!(d < f64::from(radius) + 0.5, "radius {radius}: {p}");
            assert!(d > f64::from(radius) - 2.0, "radius {radius}: {p}");
        }
    }
}

#[test]
fn test_thick_outline_within_grown_rect() {
    let tl = Position::new(3, 3);
    let br = Position::new(9, 6);
    for width in 1..6 {
        let grow = width >> 1;
        let bounds = filled_rectangle_points(Position::new(tl.x - grow, tl.y - grow), Position::new(br.x + grow, br.y + grow));
        for p in thick_rectangle_outline_points(tl, br, width) {
            assert!(bounds.contains(&p), "width {width}: {p}");
        }
    }
}

#[test]
fn test_fill_checkerboard_rows() {
    // Alternating rows: every fill stays on its own row.
    let size = Size::new(9, 6);
    for row in 0..size.height {
        let points = flood_fill_points(Position::new(4, row), size, |p| p.y % 2 == 0);
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.y == row));
    }
}
