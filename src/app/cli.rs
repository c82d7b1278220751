use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;

use clap::Parser;

/// Run a file of shell commands across a fixed-size pool of worker threads.
///
/// Type `cancel` on stdin to stop new tasks from starting; tasks already
/// running are left to finish.
#[derive(Debug, Parser)]
#[command(name = "parallel-task-runner", version)]
pub struct Cli {
    /// Path to the command list, one shell command per line.
    pub command_list: PathBuf,

    /// Number of worker threads; defaults to the machine's available
    /// parallelism.
    pub thread_count: Option<NonZeroUsize>,
}

impl Cli {
    /// Effective pool size, never zero.
    pub fn effective_thread_count(&self) -> usize {
        match self.thread_count {
            Some(count) => count.get(),
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
