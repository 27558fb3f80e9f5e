use crate::format::{self, NO_TASKS};
use crate::repository::{IdsExhausted, TaskRepository};
use crate::task::Status;
use clap::Subcommand;
use std::fmt::{Display, Formatter};
use tracing::debug;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new task
    Add { description: String },
    /// Update a task's description
    Update { id: u32, description: String },
    /// Delete a task
    Delete { id: u32 },
    /// Mark a task as in progress
    MarkInProgress { id: u32 },
    /// Mark a task as done
    MarkDone { id: u32 },
    /// List all tasks or tasks by status
    List {
        /// One of todo, in-progress or done
        status: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(u32),
    Updated(u32),
    Deleted(u32),
    Marked(u32, Status),
    NotFound(u32),
    Listed(String),
}

impl Outcome {
    /// Whether the repository was modified and needs saving.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Outcome::Added(_) | Outcome::Updated(_) | Outcome::Deleted(_) | Outcome::Marked(..)
        )
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Added(id) => write!(f, "Task added successfully (ID: {id})"),
            Outcome::Updated(id) => write!(f, "Task {id} updated successfully"),
            Outcome::Deleted(id) => write!(f, "Task {id} deleted successfully"),
            Outcome::Marked(id, status) => write!(f, "Task {id} marked as {status}"),
            Outcome::NotFound(id) => write!(f, "Task {id} not found"),
            Outcome::Listed(table) => f.write_str(table.strip_suffix('\n').unwrap_or(table)),
        }
    }
}

impl Command {
    /// Runs the command against `repo`.
    ///
    /// A missing id is reported as [`Outcome::NotFound`]. The only error is running out
    /// of ids on `add`.
    pub fn execute(self, repo: &mut TaskRepository) -> Result<Outcome, IdsExhausted> {
        debug!("Executing {:?}", self);
        let outcome = match self {
            Command::Add { description } => Outcome::Added(repo.add(description)?),
            Command::Update { id, description } => {
                found_or(repo.update(id, description), id, Outcome::Updated(id))
            }
            Command::Delete { id } => found_or(repo.delete(id), id, Outcome::Deleted(id)),
            Command::MarkInProgress { id } => mark(repo, id, Status::InProgress),
            Command::MarkDone { id } => mark(repo, id, Status::Done),
            Command::List { status } => Outcome::Listed(list(repo, status.as_deref())),
        };
        Ok(outcome)
    }
}

fn mark(repo: &mut TaskRepository, id: u32, status: Status) -> Outcome {
    found_or(repo.set_status(id, status), id, Outcome::Marked(id, status))
}

// An empty store says so, while a filter that matches nothing shows an empty table.
fn list(repo: &TaskRepository, status: Option<&str>) -> String {
    if repo.tasks().is_empty() {
        format!("{NO_TASKS}\n")
    } else {
        format::render(&repo.list(status))
    }
}

fn found_or(found: bool, id: u32, outcome: Outcome) -> Outcome {
    if found { outcome } else { Outcome::NotFound(id) }
}
