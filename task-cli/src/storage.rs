use crate::repository::TaskRepository;
use crate::task::Task;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_TASK_FILE: &str = "tasks.json";

const EMPTY_SNAPSHOT: &str = "[]";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot read task file {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("task file {} is not a valid task list", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot serialize tasks")]
    Serialize(#[source] serde_json::Error),
    #[error("cannot write task file {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Keeps the whole task list as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, creating an empty one if the file does not exist yet.
    pub fn load(&self) -> Result<TaskRepository, StorageError> {
        match fs::symlink_metadata(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.write_atomically(EMPTY_SNAPSHOT.as_bytes())?;
                info!("Created empty task file {}", self.path.display());
                return Ok(TaskRepository::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
            Ok(_) => {}
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());

        Ok(TaskRepository::from_tasks(tasks))
    }

    /// Overwrites the snapshot with the full contents of `repo`.
    pub fn save(&self, repo: &TaskRepository) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(repo.tasks()).map_err(StorageError::Serialize)?;
        self.write_atomically(json.as_bytes())?;
        debug!("Saved {} tasks to {}", repo.tasks().len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_TASK_FILE.into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    // Readers only ever see the old file or the complete new one.
    fn write_atomically(&self, contents: &[u8]) -> Result<(), StorageError> {
        let temp_path = self.temp_path();
        let result = write_and_sync(&temp_path, contents)
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result.map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn write_and_sync(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
