use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup failures. Anything here is reported before a single
/// worker is spawned.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read command list {path}: {source}")]
    CommandList { path: PathBuf, source: io::Error },
}
