//! Undo results must not depend on the snapshot policy

use grid_engine::{LogOptions, OperationLog};
use pretty_assertions::assert_eq;

fn apply(state: &mut Vec<u32>, op: &u32) {
    if *op % 5 == 0 {
        state.clear();
    } else {
        state.push(*op);
    }
}

fn walk(options: LogOptions) -> Vec<Vec<u32>> {
    crate::init_logging();
    let mut log = OperationLog::with_options(options, Vec::new, apply);
    let mut seen = Vec::new();
    for op in 1..40 {
        log.do_operation(op);
        if op % 9 == 0 {
            for _ in 0..6 {
                log.undo();
                seen.push(log.current_state().clone());
            }
            log.redo();
            seen.push(log.current_state().clone());
        }
    }
    while log.undo() {
        seen.push(log.current_state().clone());
    }
    seen
}

#[test]
fn test_undo_independent_of_capacity() {
    let reference = walk(LogOptions::without_snapshots());
    for (capacity, interval) in [(1, 1), (5, 8), (2, 3), (100, 1), (5, 0)] {
        let options = LogOptions {
            snapshot_capacity: capacity,
            snapshot_interval: interval,
        };
        assert_eq!(walk(options), reference, "capacity {capacity}, interval {interval}");
    }
}

#[test]
fn test_disabled_snapshots_keep_ring_empty() {
    let mut log = OperationLog::with_options(LogOptions::without_snapshots(), Vec::new, apply);
    for op in 1..20 {
        log.do_operation(op);
    }
    assert_eq!(log.snapshot_count(), 0);
}

#[test]
fn test_ring_is_bounded() {
    let options = LogOptions {
        snapshot_capacity: 3,
        snapshot_interval: 2,
    };
    let mut log = OperationLog::with_options(options, Vec::new, apply);
    for op in 1..=20 {
        log.do_operation(op);
    }
    assert_eq!(log.snapshot_indices(), vec![16, 18, 20]);
}

#[test]
fn test_undo_to_start_clears_snapshots_after_new_edit() {
    let options = LogOptions {
        snapshot_capacity: 5,
        snapshot_interval: 1,
    };
    let mut log = OperationLog::with_options(options, Vec::new, apply);
    for op in 1..=4 {
        log.do_operation(op);
    }
    while log.undo() {}
    log.do_operation(7);
    assert_eq!(log.snapshot_indices(), vec![1]);
    assert_eq!(log.current_state(), &vec![7]);
}
