pub mod command;
pub mod format;
pub mod repository;
pub mod storage;
pub mod task;

pub use command::{Command, Outcome};
pub use repository::{IdsExhausted, TaskRepository};
pub use storage::{JsonFileStorage, StorageError};
pub use task::{Status, Task};
