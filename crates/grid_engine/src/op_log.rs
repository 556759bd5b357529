//! Generic operation log with snapshot based undo
//!
//! The log stores every operation applied to a document together with a
//! cursor marking the last applied one. Forward steps (`do_operation`, `redo`)
//! apply a single operation to the current state. Undo rebuilds the state
//! from the closest earlier snapshot and replays the operations after it, so
//! its cost is bounded by the snapshot interval rather than the history length.
//!
//! The log knows nothing about the document type besides `Clone` and the
//! functions handed to it on construction.

use std::collections::VecDeque;

use crate::LogOptions;

/// Cached state after the first `index` operations of the log.
#[derive(Clone, Debug)]
struct Snapshot<S> {
    index: usize,
    state: S,
}

type NewStateFn<S> = Box<dyn Fn() -> S>;
type ApplyFn<S, Op> = Box<dyn Fn(&mut S, &Op)>;
type ChangeListener<S> = Box<dyn FnMut(&S)>;

pub struct OperationLog<S: Clone, Op> {
    log: Vec<Op>,
    /// Index of the last applied operation, `None` before the first one.
    cursor: Option<usize>,
    curr_state: S,
    snapshots: VecDeque<Snapshot<S>>,
    options: LogOptions,

    new_state: NewStateFn<S>,
    apply_operation: ApplyFn<S, Op>,
    change_listeners: Vec<ChangeListener<S>>,
}

impl<S: Clone, Op> OperationLog<S, Op> {
    /// Creates an empty log using the default snapshot policy.
    ///
    /// `apply_operation` must be deterministic: applying the same operations
    /// to equal states has to produce equal states.
    pub fn new(new_state: impl Fn() -> S + 'static, apply_operation: impl Fn(&mut S, &Op) + 'static) -> Self {
        Self::with_options(LogOptions::default(), new_state, apply_operation)
    }

    pub fn with_options(options: LogOptions, new_state: impl Fn() -> S + 'static, apply_operation: impl Fn(&mut S, &Op) + 'static) -> Self {
        let curr_state = new_state();
        Self {
            log: Vec::new(),
            cursor: None,
            curr_state,
            snapshots: VecDeque::with_capacity(options.snapshot_capacity),
            options,
            new_state: Box::new(new_state),
            apply_operation: Box::new(apply_operation),
            change_listeners: Vec::new(),
        }
    }

    pub fn current_state(&self) -> &S {
        &self.curr_state
    }

    pub fn options(&self) -> LogOptions {
        self.options
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Total number of operations, including undone ones that can be redone.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Number of operations reflected in the current state.
    pub fn applied_len(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    pub fn operations(&self) -> &[Op] {
        &self.log
    }

    pub fn applied_operations(&self) -> &[Op] {
        &self.log[..self.applied_len()]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.applied_len() < self.log.len()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Log indices of the live snapshots, oldest first.
    pub fn snapshot_indices(&self) -> Vec<usize> {
        self.snapshots.iter().map(|s| s.index).collect()
    }

    /// Registers a callback invoked with the new state after every effective
    /// `do_operation`, `undo` and `redo`.
    pub fn add_change_listener(&mut self, listener: impl FnMut(&S) + 'static) {
        self.change_listeners.push(Box::new(listener));
    }

    /// Appends `op` and applies it to the current state.
    ///
    /// Operations after the cursor are discarded first: redo history does not
    /// survive a new edit.
    pub fn do_operation(&mut self, op: Op) {
        if self.can_redo() {
            self.truncate();
        }
        self.log.push(op);
        let last = self.log.len() - 1;
        self.cursor = Some(last);
        (self.apply_operation)(&mut self.curr_state, &self.log[last]);
        self.take_snapshot_if_due();
        self.notify();
    }

    /// Steps back one operation. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        self.cursor = cursor.checked_sub(1);

        let target = self.applied_len();
        let (start, mut state) = match self.snapshots.iter().rev().find(|s| s.index <= target) {
            Some(snapshot) => (snapshot.index, snapshot.state.clone()),
            None => (0, (self.new_state)()),
        };
        for op in &self.log[start..target] {
            (self.apply_operation)(&mut state, op);
        }
        log::debug!("undo to {target} operations, replayed {} from index {start}", target - start);
        self.curr_state = state;
        self.notify();
        true
    }

    /// Re-applies the next undone operation. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        let next = self.applied_len();
        if next >= self.log.len() {
            return false;
        }
        self.cursor = Some(next);
        (self.apply_operation)(&mut self.curr_state, &self.log[next]);
        self.notify();
        true
    }

    /// Folds all applied operations over a fresh state, ignoring snapshots.
    pub fn replay_from_start(&self) -> S {
        let mut state = (self.new_state)();
        for op in self.applied_operations() {
            (self.apply_operation)(&mut state, op);
        }
        state
    }

    /// Drops everything after the cursor and invalidates snapshots past it.
    fn truncate(&mut self) {
        let keep = self.applied_len();
        log::debug!("discarding {} redo operations", self.log.len() - keep);
        self.log.truncate(keep);

        let cursor = self.cursor;
        let before = self.snapshots.len();
        self.snapshots.retain(|s| cursor.is_some_and(|c| s.index <= c));
        if before != self.snapshots.len() {
            log::debug!("invalidated {} snapshots", before - self.snapshots.len());
        }
    }

    fn take_snapshot_if_due(&mut self) {
        if !self.options.snapshots_enabled() || self.log.len() % self.options.snapshot_interval != 0 {
            return;
        }
        while self.snapshots.len() >= self.options.snapshot_capacity {
            if let Some(evicted) = self.snapshots.pop_front() {
                log::debug!("evicting snapshot at {}", evicted.index);
            }
        }
        log::debug!("taking snapshot at {}", self.log.len());
        self.snapshots.push_back(Snapshot {
            index: self.log.len(),
            state: self.curr_state.clone(),
        });
    }

    fn notify(&mut self) {
        for listener in &mut self.change_listeners {
            listener(&self.curr_state);
        }
    }
}
