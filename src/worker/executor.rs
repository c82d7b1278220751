use std::io;
use std::process::{Command, ExitStatus};

use crate::models::task::Task;

/// Capability for running one command line to completion. The pool treats
/// the returned status as opaque; it tracks throughput, not success.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, task: &Task) -> io::Result<ExitStatus>;
}

/// Runs each command through `sh -c`, sharing the runner's stdio, and
/// blocks until the command exits.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, task: &Task) -> io::Result<ExitStatus> {
        Command::new("sh").arg("-c").arg(&task.command).status()
    }
}
