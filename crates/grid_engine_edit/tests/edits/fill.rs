use grid_engine_edit::Tool;
use pretty_assertions::assert_eq;

use crate::{blank, from_rows, gesture};

#[test]
fn test_fill_whole_canvas() {
    let mut state = blank(3, 3);
    gesture(&mut state, Tool::Fill, 5, 1, &[(1, 1)]);
    assert_eq!(state.image.to_rows(), vec![vec![5; 3]; 3]);
}

#[test]
fn test_fill_same_color_is_noop() {
    let mut state = from_rows(&[vec![5; 3], vec![5; 3], vec![5; 3]]);
    let before = state.clone();
    gesture(&mut state, Tool::Fill, 5, 1, &[(1, 1)]);
    assert_eq!(state, before);
}

#[test]
fn test_fill_respects_borders() {
    let mut state = from_rows(&[vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]);
    gesture(&mut state, Tool::Fill, 7, 1, &[(2, 2)]);
    assert_eq!(state.image.to_rows(), vec![vec![0, 1, 7], vec![1, 1, 7], vec![7, 7, 7]]);
}

#[test]
fn test_fill_off_canvas_is_noop() {
    let mut state = blank(3, 3);
    gesture(&mut state, Tool::Fill, 2, 1, &[(-1, 1)]);
    assert_eq!(state, blank(3, 3));
}

#[test]
fn test_fill_target_follows_pointer() {
    let mut state = from_rows(&[vec![1, 0]]);
    gesture(&mut state, Tool::Fill, 3, 1, &[(0, 0), (1, 0)]);
    assert_eq!(state.image.to_rows(), vec![vec![1, 3]]);
}
