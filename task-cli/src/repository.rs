use crate::task::{Status, Task};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no task ids left to assign")]
pub struct IdsExhausted;

/// The in-memory task list for one invocation, in insertion order.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    // None once u32::MAX has been handed out
    next_id: Option<u32>,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Builds a repository from a loaded snapshot.
    ///
    /// The next id is one past the highest id present in the snapshot.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(Task::id).max().unwrap_or(0).checked_add(1);
        Self { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn add(&mut self, description: String) -> Result<u32, IdsExhausted> {
        let curr_id = self.next_id.ok_or(IdsExhausted)?;
        self.tasks.push(Task::new(curr_id, description));
        self.next_id = curr_id.checked_add(1);
        Ok(curr_id)
    }

    /// Replaces the description of a task. Returns `false` if no task has that id.
    pub fn update(&mut self, id: u32, description: String) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_description(description);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, id: u32, status: Status) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Lists tasks whose status matches `filter` exactly.
    ///
    /// `None` or an empty filter returns every task. A filter that names no known
    /// status simply matches nothing.
    pub fn list(&self, filter: Option<&str>) -> Vec<&Task> {
        match filter {
            Some(status) if !status.is_empty() => self
                .tasks
                .iter()
                .filter(|task| task.status().as_str() == status)
                .collect(),
            _ => self.tasks.iter().collect(),
        }
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}


#[cfg(test)]
mod next_id_tests {
    use super::*;

    #[test]
    fn test_next_id_follows_max_id_of_loaded_tasks() {
        // Arrange
        let tasks = vec![
            Task::new(3, "three".to_string()),
            Task::new(10, "ten".to_string()),
            Task::new(5, "five".to_string()),
        ];

        // Act
        let mut repo = TaskRepository::from_tasks(tasks);

        // Assert
        assert_eq!(repo.next_id, Some(11));
        assert_eq!(repo.add("eleven".to_string()).unwrap(), 11);
        assert_eq!(repo.add("twelve".to_string()).unwrap(), 12);
    }

    #[test]
    fn test_from_empty_snapshot_starts_with_id_one() {
        let repo = TaskRepository::from_tasks(Vec::new());

        assert_eq!(repo.next_id, Some(1));
    }

    #[test]
    fn test_next_id_maintained_after_removing_tasks() {
        let mut repo = TaskRepository::new();

        repo.add("Task 1".to_string()).unwrap();
        repo.add("Task 2".to_string()).unwrap();
        repo.add("Task 3".to_string()).unwrap();

        repo.delete(3);

        assert_eq!(
            repo.next_id,
            Some(4),
            "next_id should not change when tasks are removed"
        );

        let id = repo.add("Task 4".to_string()).unwrap();
        assert_eq!(
            id, 4,
            "New task should get ID 4, not reuse the removed ID 3"
        );
    }

    #[test]
    fn test_snapshot_holding_max_id_loads_but_refuses_new_ids() {
        // Arrange
        let tasks = vec![Task::new(u32::MAX, "last".to_string())];

        // Act
        let mut repo = TaskRepository::from_tasks(tasks);

        // Assert
        assert_eq!(repo.next_id, None);
        assert_eq!(repo.add("overflow".to_string()), Err(IdsExhausted));
        assert_eq!(repo.tasks().len(), 1);
        assert!(repo.set_status(u32::MAX, Status::Done));
    }

    #[test]
    fn test_max_id_is_handed_out_once() {
        let mut repo = TaskRepository::from_tasks(vec![Task::new(u32::MAX - 1, "a".to_string())]);

        assert_eq!(repo.add("b".to_string()), Ok(u32::MAX));
        assert_eq!(repo.add("c".to_string()), Err(IdsExhausted));
        assert_eq!(repo.tasks().len(), 2);
    }
}
