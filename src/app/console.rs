use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::warn;

use crate::manager::queue::TaskQueue;

/// Spawns the interactive control thread. It blocks on stdin for the life
/// of the process, reading whitespace-delimited tokens; the only recognized
/// command is `cancel`. The caller never joins this thread.
pub fn spawn_console_thread(queue: Arc<TaskQueue>) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    for token in line.split_whitespace() {
                        handle_token(token, &queue);
                    }
                }
                Err(e) => {
                    warn!("Failed to read from stdin: {}.", e);
                    break;
                }
            }
        }
    })
}

fn handle_token(token: &str, queue: &TaskQueue) {
    if token == "cancel" {
        queue.request_cancel();
        println!(
            "Cancellation requested. No new tasks will start; \
             the run ends when the last running task finishes."
        );
    } else {
        println!("Unknown command: {}", token);
    }
}
