use grid_engine_edit::{create_edit, Position, Size, Tool};
use pretty_assertions::assert_eq;

use crate::{blank, click, count, gesture};

fn with_block() -> grid_engine_edit::EditState {
    let mut state = blank(6, 6);
    for (col, row) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        state.image.set(col, row, 9);
    }
    state
}

#[test]
fn test_select_move_commit() {
    let mut state = with_block();

    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 2)]);
    assert_eq!(count(&state, 9), 0);
    assert_eq!(state.layer_offset, Position::new(1, 1));
    assert_eq!(state.floating_layer.as_ref().map(|l| l.size()), Some(Size::new(2, 2)));

    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 1), (3, 2)]);
    assert_eq!(state.layer_offset, Position::new(3, 2));
    assert!(state.in_floating_layer(4, 3));

    gesture(&mut state, Tool::Marquee, 0, 1, &[(0, 5)]);
    assert!(state.floating_layer.is_none());
    for (col, row) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert_eq!(state.image.get(col, row), 0);
    }
    for (col, row) in [(3, 2), (4, 2), (3, 3), (4, 3)] {
        assert_eq!(state.image.get(col, row), 9);
    }
}

#[test]
fn test_reverse_drag_selects_same_region() {
    let mut state = with_block();
    gesture(&mut state, Tool::Marquee, 0, 1, &[(2, 2), (1, 1)]);
    assert_eq!(state.layer_offset, Position::new(1, 1));
    assert_eq!(state.floating_layer.as_ref().map(|l| l.to_rows()), Some(vec![vec![9, 9], vec![9, 9]]));
}

#[test]
fn test_click_inside_layer_merges() {
    let mut state = with_block();
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 2)]);
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 2)]);
    assert!(state.floating_layer.is_none());
    assert_eq!(state, with_block());
}

#[test]
fn test_other_tool_merges_layer() {
    let mut state = with_block();
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 2)]);
    state.layer_offset = Position::new(4, 4);
    gesture(&mut state, Tool::Line, 3, 1, &[(0, 0), (1, 0)]);
    assert!(state.floating_layer.is_none());
    assert_eq!(state.image.get(4, 4), 9);
    assert_eq!(state.image.get(5, 5), 9);
    assert_eq!(state.image.get(1, 0), 3);
}

#[test]
fn test_marquee_has_no_preview() {
    let edit = create_edit(Tool::Marquee, Size::new(4, 4), 1, 1).unwrap();
    assert!(!edit.show_preview());
}

#[test]
fn test_click_without_selection_changes_nothing() {
    let mut state = with_block();
    click(&mut state, Tool::Marquee, 0, 1, 1, 1);
    assert!(state.floating_layer.is_none());
    assert_eq!(state, with_block());
}

#[test]
fn test_click_with_move_report_merges() {
    let mut state = with_block();
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 2)]);
    assert!(state.floating_layer.is_some());

    click(&mut state, Tool::Marquee, 0, 1, 2, 2);
    assert!(state.floating_layer.is_none());
    assert_eq!(state, with_block());
}

#[test]
fn test_drag_back_to_start_keeps_layer() {
    let mut state = with_block();
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (2, 2)]);
    gesture(&mut state, Tool::Marquee, 0, 1, &[(1, 1), (1, 1), (3, 3), (1, 1)]);
    assert_eq!(state.layer_offset, Position::new(1, 1));
    assert!(state.floating_layer.is_some());
}
