use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::tick;

use crate::manager::queue::TaskQueue;

const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Spawns the status thread: every five seconds it snapshots the queue and
/// prints a progress line. The tick channel never closes, so the thread
/// runs until the process exits; the caller never joins it.
pub fn spawn_status_thread(queue: Arc<TaskQueue>) -> JoinHandle<()> {
    thread::spawn(move || {
        let ticker = tick(REPORT_INTERVAL);
        for _ in ticker.iter() {
            println!("{}", queue.snapshot());
        }
    })
}
