use std::fmt;

/// One unit of work: an opaque shell command line, kept verbatim from the
/// command list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub command: String,
}

impl Task {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

/// Point-in-time view of how far the run has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} tasks completed.", self.completed, self.total)
    }
}
