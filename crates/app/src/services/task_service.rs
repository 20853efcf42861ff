//! Task service: turns wizard submissions into tasks and manages them.

use robodesk_domain::error::{NotFoundError, RoboDeskError, ValidationError};
use robodesk_domain::id::{RobotId, TaskId};
use robodesk_domain::robot::Robot;
use robodesk_domain::task::{Task, TaskDraft};

use crate::ports::{RobotRepository, TaskRepository, TemplateSource};

/// Application service for robot tasks.
pub struct TaskService<TR, RR, TS> {
    tasks: TR,
    robots: RR,
    templates: TS,
}

impl<TR, RR, TS> TaskService<TR, RR, TS>
where
    TR: TaskRepository,
    RR: RobotRepository,
    TS: TemplateSource,
{
    /// Create a new service from its ports.
    pub fn new(tasks: TR, robots: RR, templates: TS) -> Self {
        Self {
            tasks,
            robots,
            templates,
        }
    }

    async fn robot(&self, id: RobotId) -> Result<Robot, RoboDeskError> {
        self.robots.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Robot",
                id: id.to_string(),
            }
            .into()
        })
    }

    async fn task(&self, id: TaskId) -> Result<Task, RoboDeskError> {
        self.tasks.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Task",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Create a task from a wizard submission.
    ///
    /// Every selected template must belong to the catalog of the robot's
    /// stored category; the category carried by the draft is not trusted.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown robot,
    /// [`ValidationError::UnknownTemplate`] for a foreign template, another
    /// [`RoboDeskError::Validation`] when task invariants fail, or a storage
    /// error from the ports.
    #[tracing::instrument(skip(self, draft), fields(robot_id = %draft.robot_id, task_name = %draft.name))]
    pub async fn create_from_draft(&self, draft: TaskDraft) -> Result<Task, RoboDeskError> {
        let robot = self.robot(draft.robot_id).await?;
        let catalog = self.templates.catalog().await?;

        let unknown = |id: &robodesk_domain::id::TemplateId| ValidationError::UnknownTemplate {
            category: robot.category.clone(),
            id: id.to_string(),
        };
        if let Some(id) = draft
            .conditions
            .iter()
            .find(|id| !catalog.contains_condition(&robot.category, id))
        {
            return Err(unknown(id).into());
        }
        if let Some(id) = draft
            .actions
            .iter()
            .find(|id| !catalog.contains_action(&robot.category, id))
        {
            return Err(unknown(id).into());
        }

        let task = Task::from_draft(draft)?;
        let created = self.tasks.create(task).await?;
        tracing::info!(task_id = %created.id, "task created");
        Ok(created)
    }

    /// Tasks of a robot.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown robot, or a
    /// storage error from the ports.
    pub async fn list_for_robot(&self, robot_id: RobotId) -> Result<Vec<Task>, RoboDeskError> {
        self.robot(robot_id).await?;
        self.tasks.find_by_robot(robot_id).await
    }

    /// Enable or pause a task.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown task, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_enabled(&self, id: TaskId, enabled: bool) -> Result<Task, RoboDeskError> {
        let mut task = self.task(id).await?;
        task.enabled = enabled;
        self.tasks.update(task).await
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown task, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: TaskId) -> Result<(), RoboDeskError> {
        self.task(id).await?;
        self.tasks.delete(id).await
    }
}
