//! In-memory [`TaskRepository`].

use std::sync::RwLock;

use robodesk_app::ports::TaskRepository;
use robodesk_domain::error::{NotFoundError, RoboDeskError};
use robodesk_domain::id::{RobotId, TaskId};
use robodesk_domain::task::Task;

use crate::error::StorageError;

const STORE: &str = "task";

/// Tasks kept in creation order.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }

    fn not_found(id: TaskId) -> NotFoundError {
        NotFoundError {
            entity: "Task",
            id: id.to_string(),
        }
    }
}

impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, RoboDeskError> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        tasks.push(task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Option<Task>, RoboDeskError> {
        let tasks = self
            .tasks
            .read()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_robot(&self, robot_id: RobotId) -> Result<Vec<Task>, RoboDeskError> {
        let tasks = self
            .tasks
            .read()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        Ok(tasks
            .iter()
            .filter(|t| t.robot_id == robot_id)
            .cloned()
            .collect())
    }

    async fn update(&self, task: Task) -> Result<Task, RoboDeskError> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| Self::not_found(task.id))?;
        *slot = task.clone();
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), RoboDeskError> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found(id).into());
        }
        Ok(())
    }
}
