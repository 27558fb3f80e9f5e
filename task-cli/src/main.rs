use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use task_cli::storage::DEFAULT_TASK_FILE;
use task_cli::{Command, JsonFileStorage};
use tracing::{Level, error};

/// A simple task manager CLI application
#[derive(Parser, Debug)]
#[command(name = "task-cli", version)]
struct Cli {
    /// File the task list is stored in
    #[arg(short, long, global = true, default_value = DEFAULT_TASK_FILE)]
    file: PathBuf,

    /// Log more details to stderr (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let storage = JsonFileStorage::new(args.file);
    let mut tasks = storage.load().context("cannot load tasks")?;

    let outcome = args
        .command
        .execute(&mut tasks)
        .context("cannot run command")?;
    println!("{}", outcome);

    if outcome.changed() {
        storage
            .save(&tasks)
            .inspect_err(|err| error!("Error saving tasks: {}", err))
            .context("cannot save tasks")?;
    }

    Ok(())
}
