use std::collections::VecDeque;
use std::sync::Mutex;

use log::info;

use crate::models::task::{Progress, Task};

/// Shared FIFO of pending commands plus the cancellation latch.
///
/// Both `pending` and `cancelled` live behind a single mutex so that
/// workers, the console and the status reporter always observe the pair
/// together. The latch is one-way: once tripped, `dequeue` reports the
/// queue as drained even while tasks remain pending. Callers never see the
/// raw deque or flag.
pub struct TaskQueue {
    state: Mutex<QueueState>,
    initial_count: usize,
}

struct QueueState {
    pending: VecDeque<Task>,
    cancelled: bool,
}

impl TaskQueue {
    pub fn new(tasks: Vec<Task>) -> Self {
        let initial_count = tasks.len();
        TaskQueue {
            state: Mutex::new(QueueState {
                pending: tasks.into(),
                cancelled: false,
            }),
            initial_count,
        }
    }

    /// Hands out the front-most pending task, preserving file order.
    /// Returns `None` once the queue is drained or cancellation was
    /// requested; a task handed out is never requeued.
    pub fn dequeue(&self) -> Option<Task> {
        let mut state = self.state.lock().unwrap();
        if state.cancelled {
            return None;
        }
        state.pending.pop_front()
    }

    /// Trips the cancellation latch. Idempotent; there is no way back.
    /// Tasks already handed to workers are unaffected.
    pub fn request_cancel(&self) {
        let remaining = {
            let mut state = self.state.lock().unwrap();
            state.cancelled = true;
            state.pending.len()
        };
        info!("Cancellation latched with {} tasks still pending.", remaining);
    }

    pub fn snapshot(&self) -> Progress {
        let state = self.state.lock().unwrap();
        Progress {
            completed: self.initial_count - state.pending.len(),
            total: self.initial_count,
        }
    }
}
