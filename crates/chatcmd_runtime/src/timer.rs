//! Deferred follow-up work.
//!
//! Handlers that need to act later (reminders, timed clears) schedule a task
//! here. The console runs due tasks between lines; nothing runs in the
//! background.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

type Task = Box<dyn FnOnce()>;

struct Scheduled {
    due: Instant,
    seq: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // BinaryHeap is a max-heap: reverse so the earliest (then oldest) is on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Queue of tasks waiting for their due time.
#[derive(Default)]
pub struct TimerQueue {
    tasks: RefCell<BinaryHeap<Scheduled>>,
    next_seq: Cell<u64>,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to run `after` from now.
    ///
    /// Returns the due time, or `None` (and drops the task) if `after` is
    /// too far in the future for the platform clock.
    pub fn schedule(&self, after: Duration, task: impl FnOnce() + 'static) -> Option<Instant> {
        let Some(due) = Instant::now().checked_add(after) else {
            warn!(?after, "delay out of range; task dropped");
            return None;
        };
        self.schedule_at(due, task);
        Some(due)
    }

    /// Schedules `task` to run at `due`.
    pub fn schedule_at(&self, due: Instant, task: impl FnOnce() + 'static) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.tasks.borrow_mut().push(Scheduled {
            due,
            seq,
            task: Box::new(task),
        });
        trace!(seq, "scheduled task");
    }

    /// Runs every task due at or before `now`, earliest first.
    ///
    /// Tasks may schedule further tasks; those run on a later call.
    /// Returns the number of tasks run.
    pub fn run_due(&self, now: Instant) -> usize {
        let due = {
            let mut tasks = self.tasks.borrow_mut();
            let mut due = Vec::new();
            while tasks.peek().is_some_and(|next| next.due <= now) {
                if let Some(next) = tasks.pop() {
                    due.push(next);
                }
            }
            due
        };

        let count = due.len();
        for scheduled in due {
            trace!(seq = scheduled.seq, "running task");
            (scheduled.task)();
        }
        count
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Due time of the next task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.borrow().peek().map(|next| next.due)
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
