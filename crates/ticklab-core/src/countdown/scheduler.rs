//! Scheduler abstraction.
//!
//! The countdown never touches a wall clock directly: it hands a repeating
//! action to a [`Scheduler`] and gets a [`CancelHandle`] back. The action
//! returns [`ControlFlow::Break`] to release its own registration, which is
//! how the countdown cancels itself on reaching zero. Tests inject
//! [`ManualScheduler`] and fire ticks by hand.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Repeating action driven by a scheduler. `Break` releases the
/// registration; no further invocations happen after that.
pub type RepeatingAction = Box<dyn FnMut() -> ControlFlow<()> + Send + 'static>;

/// Opaque handle to one repeating registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelHandle(u64);

/// Cooperative repeating-callback scheduler.
///
/// Actions are never run in parallel with themselves; invocations are
/// sequential and time-ordered.
pub trait Scheduler {
    /// Register `action` to run once per `interval`, starting one interval
    /// from now.
    fn schedule_repeating(&self, interval: Duration, action: RepeatingAction) -> CancelHandle;

    /// Release a registration externally. Releasing an already-finished
    /// registration is a no-op.
    fn cancel(&self, handle: CancelHandle);
}

/// Real scheduler backed by `tokio::time::interval`.
///
/// Each registration is one spawned task; the task exits when the action
/// breaks and drops its own map entry, and `cancel` aborts it.
#[derive(Debug, Default)]
pub struct TokioScheduler {
    next_id: AtomicU64,
    tasks: Arc<Mutex<HashMap<u64, tokio::task::JoinHandle<()>>>>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for a registration to finish (action broke or was cancelled).
    pub async fn wait(&self, handle: CancelHandle) {
        let task = self.tasks.lock().unwrap().remove(&handle.0);
        if let Some(task) = task {
            // JoinError only surfaces on abort; both outcomes mean done.
            let _ = task.await;
        }
    }

    /// Number of live registrations.
    pub fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, interval: Duration, mut action: RepeatingAction) -> CancelHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let tasks = Arc::clone(&self.tasks);
        // Hold the lock across spawn + insert so the task's own removal
        // cannot run before the entry exists.
        let mut map = self.tasks.lock().unwrap();
        let task = tokio::spawn(async move {
            let mut clock = tokio::time::interval(interval);
            // An interval's first tick completes immediately; consume it so
            // the action first fires one interval from now.
            clock.tick().await;
            loop {
                clock.tick().await;
                if action().is_break() {
                    break;
                }
            }
            tasks.lock().unwrap().remove(&id);
        });
        map.insert(id, task);
        CancelHandle(id)
    }

    fn cancel(&self, handle: CancelHandle) {
        if let Some(task) = self.tasks.lock().unwrap().remove(&handle.0) {
            task.abort();
        }
    }
}

/// Deterministic scheduler for tests: nothing runs until `fire_all()`.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: AtomicU64,
    actions: Mutex<HashMap<u64, RepeatingAction>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every live action once, in registration order. Actions that
    /// break are released before this returns.
    pub fn fire_all(&self) {
        let mut actions = self.actions.lock().unwrap();
        let mut ids: Vec<u64> = actions.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            if let Some(action) = actions.get_mut(&id) {
                if action().is_break() {
                    actions.remove(&id);
                }
            }
        }
    }

    /// Number of live registrations.
    pub fn pending(&self) -> usize {
        self.actions.lock().unwrap().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, _interval: Duration, action: RepeatingAction) -> CancelHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.actions.lock().unwrap().insert(id, action);
        CancelHandle(id)
    }

    fn cancel(&self, handle: CancelHandle) {
        self.actions.lock().unwrap().remove(&handle.0);
    }
}
