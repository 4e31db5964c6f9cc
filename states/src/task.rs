//! Latest-only task tracking with cooperative cancellation.
//!
//! A [`TaskSlot`] represents one kind of background work (for example "list
//! patients"). Every call to [`TaskSlot::spawn`] bumps the slot's generation,
//! cancels the handle it issued before and returns a fresh [`TaskHandle`].
//! When the work completes, the owner asks [`TaskSlot::finish`] whether the
//! handle is still the current one; stale completions are rejected.
//!
//! # Usage
//!
//! ```
//! use roster_states::TaskSlot;
//!
//! let mut slot = TaskSlot::new("list");
//! let first = slot.spawn();
//! let second = slot.spawn();
//!
//! assert!(first.is_cancelled());
//! assert!(!slot.finish(&first));
//! assert!(slot.finish(&second));
//! assert!(!slot.is_busy());
//! ```

use log::debug;
use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Combines the slot name with a generation counter. Higher generations were
/// issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    slot: &'static str,
    generation: u64,
}

impl TaskId {
    /// Creates a new `TaskId` for the given slot and generation.
    pub fn new(slot: &'static str, generation: u64) -> Self {
        Self { slot, generation }
    }

    /// Returns the name of the slot that issued this task.
    pub fn slot(&self) -> &'static str {
        self.slot
    }

    /// Returns the generation counter of this task identifier.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task with cooperative cancellation support.
///
/// Cloning a handle shares the underlying token, so cancelling one clone is
/// visible through every other clone (including the one moved into the
/// completion callback).
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    /// Creates a new `TaskHandle` with the given ID and cancellation token.
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    /// Returns the `TaskId` of this task.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Requests cooperative cancellation of this task.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Returns `true` if cancellation has been requested for this task.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Issues at most one live task at a time for a named kind of work.
#[derive(Debug)]
pub struct TaskSlot {
    name: &'static str,
    generation: u64,
    current: Option<TaskHandle>,
}

impl TaskSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: 0,
            current: None,
        }
    }

    /// Starts a new task, superseding (and cancelling) the previous one.
    pub fn spawn(&mut self) -> TaskHandle {
        if let Some(previous) = self.current.take() {
            debug!(
                "{}: superseding task generation {}",
                self.name,
                previous.id().generation()
            );
            previous.cancel();
        }

        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(self.name, self.generation),
            CancellationToken::new(),
        );
        self.current = Some(handle.clone());
        handle
    }

    /// Returns `true` while the latest spawned task has not finished.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the id of the live task, if any.
    fn current(&self) -> Option<TaskId> {
        self.current.as_ref().map(TaskHandle::id)
    }

    /// Returns `true` if `handle` is the live task and has not been cancelled.
    fn is_current(&self, handle: &TaskHandle) -> bool {
        !handle.is_cancelled() && self.current() == Some(handle.id())
    }

    /// Marks the task as finished.
    ///
    /// Returns `false` for stale or cancelled handles; the caller must drop
    /// their result. The live task is left untouched in that case.
    pub fn finish(&mut self, handle: &TaskHandle) -> bool {
        if !self.is_current(handle) {
            return false;
        }
        self.current = None;
        true
    }
}
