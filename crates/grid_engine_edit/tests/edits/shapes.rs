use grid_engine_edit::{EditState, Tool};
use pretty_assertions::assert_eq;

use crate::{blank, click, count, gesture};

fn rect(tool: Tool, width: i32, from: (i32, i32), to: (i32, i32)) -> EditState {
    let mut state = blank(10, 10);
    gesture(&mut state, tool, 1, width, &[from, to]);
    state
}

#[test]
fn test_outline() {
    let state = rect(Tool::Rect, 1, (1, 1), (4, 3));
    assert_eq!(count(&state, 1), 10);
    assert_eq!(state.image.get(2, 2), 0);
    assert_eq!(state.image.get(3, 2), 0);
    assert_eq!(state.image.get(4, 3), 1);
}

#[test]
fn test_outline_drag_direction() {
    assert_eq!(rect(Tool::Rect, 1, (1, 1), (4, 3)), rect(Tool::Rect, 1, (4, 3), (1, 1)));
    assert_eq!(rect(Tool::Rect, 2, (5, 1), (2, 6)), rect(Tool::Rect, 2, (2, 6), (5, 1)));
}

#[test]
fn test_thick_outline_rings() {
    let state = rect(Tool::Rect, 2, (2, 2), (5, 5));
    assert_eq!(count(&state, 1), 32);
    assert_eq!(state.image.get(1, 1), 1);
    assert_eq!(state.image.get(2, 2), 1);
    assert_eq!(state.image.get(3, 3), 0);

    let state = rect(Tool::Rect, 3, (2, 2), (5, 5));
    assert_eq!(count(&state, 1), 36);
    assert_eq!(state.image.get(0, 0), 0);
    assert_eq!(state.image.get(7, 7), 0);
}

#[test]
fn test_inverted_rings_are_skipped() {
    let state = rect(Tool::Rect, 3, (5, 5), (5, 5));
    assert_eq!(count(&state, 1), 9);
}

#[test]
fn test_filled_rect() {
    let state = rect(Tool::FilledRect, 3, (3, 1), (1, 2));
    assert_eq!(count(&state, 1), 6);
    assert_eq!(state.image.get(2, 1), 1);
    assert_eq!(state.image.get(2, 3), 0);
}

#[test]
fn test_circle() {
    let mut state = blank(12, 12);
    gesture(&mut state, Tool::Circle, 1, 1, &[(5, 5), (8, 9)]);
    for (col, row) in [(9, 5), (1, 5), (5, 9), (5, 1)] {
        assert_eq!(state.image.get(col, row), 1, "({col}, {row})");
    }
    assert_eq!(state.image.get(10, 5), 0);
    assert_eq!(state.image.get(5, 5), 0);
}

#[test]
fn test_circle_without_drag() {
    let mut state = blank(6, 6);
    gesture(&mut state, Tool::Circle, 1, 1, &[(3, 3)]);
    assert_eq!(state, blank(6, 6));
}

#[test]
fn test_clicks_with_move_report() {
    let mut state = blank(10, 10);
    click(&mut state, Tool::Rect, 1, 1, 4, 4);
    assert_eq!(count(&state, 1), 1);
    assert_eq!(state.image.get(4, 4), 1);

    let mut state = blank(10, 10);
    click(&mut state, Tool::Rect, 1, 3, 4, 4);
    assert_eq!(count(&state, 1), 9);

    let mut state = blank(10, 10);
    click(&mut state, Tool::FilledRect, 1, 1, 2, 7);
    assert_eq!(count(&state, 1), 1);

    let mut state = blank(10, 10);
    click(&mut state, Tool::Line, 1, 1, 6, 2);
    assert_eq!(count(&state, 1), 1);
    assert_eq!(state.image.get(6, 2), 1);

    let mut state = blank(10, 10);
    click(&mut state, Tool::Circle, 1, 1, 5, 5);
    assert_eq!(state, blank(10, 10));
}
