mod app;
mod error;
mod manager;
mod models;
mod source;
mod worker;

use anyhow::Result;
use clap::Parser;

use app::cli::Cli;
use manager::task_pool::TaskPool;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tasks = source::load_commands(&cli.command_list)?;
    let pool = TaskPool::new(tasks, cli.effective_thread_count());
    pool.run();

    Ok(())
}
