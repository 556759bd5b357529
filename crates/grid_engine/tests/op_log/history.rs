//! Round trips, truncation and replay equivalence

use grid_engine::{LogOptions, OperationLog};
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Push(i32),
    Double,
    Pop,
}

fn apply(state: &mut Vec<i32>, op: &Op) {
    match op {
        Op::Push(v) => state.push(*v),
        Op::Double => state.iter_mut().for_each(|v| *v *= 2),
        Op::Pop => {
            state.pop();
        }
    }
}

fn new_log(options: LogOptions) -> OperationLog<Vec<i32>, Op> {
    OperationLog::with_options(options, Vec::new, apply)
}

fn script() -> Vec<Op> {
    let mut ops = Vec::new();
    for i in 0..25 {
        ops.push(Op::Push(i));
        if i % 4 == 0 {
            ops.push(Op::Double);
        }
        if i % 7 == 0 {
            ops.push(Op::Pop);
        }
    }
    ops
}

#[test]
fn test_do_then_undo_round_trip() {
    let mut log = new_log(LogOptions::default());
    log.do_operation(Op::Push(1));
    log.do_operation(Op::Push(2));
    let before = log.current_state().clone();

    let ops = script();
    for op in &ops {
        log.do_operation(op.clone());
    }
    for _ in &ops {
        assert!(log.undo());
    }
    assert_eq!(log.current_state(), &before);
}

#[test]
fn test_incremental_equals_replay() {
    let mut log = new_log(LogOptions::default());
    let mut expected = Vec::new();
    for op in script() {
        apply(&mut expected, &op);
        log.do_operation(op);
        assert_eq!(log.current_state(), &expected);
    }
    assert_eq!(log.replay_from_start(), expected);
}

#[test]
fn test_new_operation_discards_redo() {
    let mut log = new_log(LogOptions::default());
    log.do_operation(Op::Push(1)); // A
    log.do_operation(Op::Push(2)); // B
    log.undo();
    log.do_operation(Op::Push(3)); // C

    assert!(!log.can_redo());
    assert!(!log.redo());
    assert_eq!(log.current_state(), &vec![1, 3]);
    assert_eq!(log.operations(), &[Op::Push(1), Op::Push(3)]);
}

#[test]
fn test_undo_redo_at_ends_are_noops() {
    let mut log = new_log(LogOptions::default());
    assert!(!log.undo());
    log.do_operation(Op::Push(5));
    assert!(!log.redo());
    assert!(log.undo());
    assert!(!log.undo());
    assert_eq!(log.cursor(), None);
    assert!(log.current_state().is_empty());
    assert!(log.redo());
    assert_eq!(log.current_state(), &vec![5]);
}

#[test]
fn test_redo_restores_undone_states() {
    let mut log = new_log(LogOptions::default());
    let mut states = vec![log.current_state().clone()];
    for op in script() {
        log.do_operation(op);
        states.push(log.current_state().clone());
    }
    while log.undo() {}
    for expected in states.iter().skip(1) {
        assert!(log.redo());
        assert_eq!(log.current_state(), expected);
    }
}

#[test]
fn test_state_matches_cursor_after_mixed_walk() {
    let mut log = new_log(LogOptions {
        snapshot_capacity: 3,
        snapshot_interval: 4,
    });
    let ops = script();
    for (i, op) in ops.iter().enumerate() {
        log.do_operation(op.clone());
        if i % 5 == 0 {
            log.undo();
            log.undo();
            log.redo();
        }
        assert_eq!(log.current_state(), &log.replay_from_start());
    }
}
