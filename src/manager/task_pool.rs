use std::sync::Arc;

use log::{error, info};

use crate::app::console;
use crate::manager::queue::TaskQueue;
use crate::manager::reporter;
use crate::models::task::{Progress, Task};
use crate::worker::executor::{CommandExecutor, ShellExecutor};
use crate::worker::worker::spawn_worker_thread;

/// Owns the task queue and the run's termination contract: the run is done
/// the instant the last worker exits. The console and status threads are
/// fire-and-forget; they live until the process does and are never joined.
pub struct TaskPool {
    queue: Arc<TaskQueue>,
    executor: Arc<dyn CommandExecutor>,
    thread_count: usize,
}

impl TaskPool {
    pub fn new(tasks: Vec<Task>, thread_count: usize) -> Self {
        Self::with_executor(tasks, thread_count, Arc::new(ShellExecutor))
    }

    pub fn with_executor(
        tasks: Vec<Task>,
        thread_count: usize,
        executor: Arc<dyn CommandExecutor>,
    ) -> Self {
        TaskPool {
            queue: Arc::new(TaskQueue::new(tasks)),
            executor,
            thread_count,
        }
    }

    /// Spawns the workers plus the console and status threads, then waits
    /// for the workers alone. Returns the final progress snapshot.
    pub fn run(self) -> Progress {
        info!("Spawning {} worker threads.", self.thread_count);
        let mut workers = Vec::with_capacity(self.thread_count);
        for id in 0..self.thread_count {
            workers.push(spawn_worker_thread(
                id,
                Arc::clone(&self.queue),
                Arc::clone(&self.executor),
            ));
        }

        console::spawn_console_thread(Arc::clone(&self.queue));
        reporter::spawn_status_thread(Arc::clone(&self.queue));

        for worker in workers {
            if worker.join().is_err() {
                error!("A worker thread panicked.");
            }
        }

        let progress = self.queue.snapshot();
        info!("All workers finished: {}", progress);
        progress
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;
    use std::sync::Mutex;

    use super::*;

    struct RecordingExecutor {
        ran: Mutex<Vec<String>>,
    }

    impl CommandExecutor for RecordingExecutor {
        fn execute(&self, task: &Task) -> io::Result<ExitStatus> {
            self.ran.lock().unwrap().push(task.command.clone());
            Ok(ExitStatus::from_raw(0))
        }
    }

    #[test]
    fn pool_drains_all_tasks_and_reports_them_completed() {
        let tasks = vec![
            Task::new("echo a".to_string()),
            Task::new("echo b".to_string()),
            Task::new("echo c".to_string()),
        ];
        let executor = Arc::new(RecordingExecutor {
            ran: Mutex::new(Vec::new()),
        });

        let progress = TaskPool::with_executor(tasks, 2, executor.clone()).run();

        assert_eq!(
            progress,
            Progress {
                completed: 3,
                total: 3
            }
        );
        let mut ran = executor.ran.lock().unwrap().clone();
        ran.sort();
        assert_eq!(ran, ["echo a", "echo b", "echo c"]);
    }

    #[test]
    fn empty_command_list_completes_immediately() {
        let executor = Arc::new(RecordingExecutor {
            ran: Mutex::new(Vec::new()),
        });

        let progress = TaskPool::with_executor(Vec::new(), 4, executor.clone()).run();

        assert_eq!(
            progress,
            Progress {
                completed: 0,
                total: 0
            }
        );
        assert!(executor.ran.lock().unwrap().is_empty());
    }
}
