use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::manager::queue::TaskQueue;
use crate::worker::executor::CommandExecutor;

/// Spawns one worker thread. The worker pulls tasks from the queue one at a
/// time and runs each to completion before asking for the next, so at most
/// one task per worker is ever in flight. It exits as soon as the queue
/// reports no more work.
pub fn spawn_worker_thread(
    id: usize,
    queue: Arc<TaskQueue>,
    executor: Arc<dyn CommandExecutor>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("Worker {} started.", id);
        while let Some(task) = queue.dequeue() {
            debug!("Worker {} running '{}'.", id, task.command);
            match executor.execute(&task) {
                Ok(status) => {
                    // Exit status is noted and dropped; failed tasks are
                    // neither retried nor requeued.
                    debug!("Worker {} finished '{}' ({}).", id, task.command, status);
                }
                Err(e) => {
                    debug!("Worker {} could not launch '{}': {}.", id, task.command, e);
                }
            }
        }
        debug!("Worker {} exiting, no more work.", id);
    })
}
