use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::RunnerError;
use crate::models::task::Task;

/// Reads the command list, one task per line. Every line is kept verbatim
/// as its own task, empty lines included, and echoed to stdout as loaded.
pub fn load_commands(path: &Path) -> Result<Vec<Task>, RunnerError> {
    println!("Reading commands list: {}", path.display());

    let file = File::open(path).map_err(|source| RunnerError::CommandList {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut tasks = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| RunnerError::CommandList {
            path: path.to_path_buf(),
            source,
        })?;
        println!("{}", line);
        tasks.push(Task::new(line));
    }

    info!("Loaded {} commands from {}.", tasks.len(), path.display());
    Ok(tasks)
}
