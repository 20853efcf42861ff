//! Storage ports: repository traits for robots and their tasks.

use std::future::Future;
use std::sync::Arc;

use robodesk_domain::error::RoboDeskError;
use robodesk_domain::id::{RobotId, TaskId};
use robodesk_domain::robot::Robot;
use robodesk_domain::task::Task;

/// Repository for querying and updating [`Robot`]s.
pub trait RobotRepository {
    /// Get a robot by its unique identifier.
    fn get_by_id(
        &self,
        id: RobotId,
    ) -> impl Future<Output = Result<Option<Robot>, RoboDeskError>> + Send;

    /// Get all robots, ordered by creation time.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Robot>, RoboDeskError>> + Send;

    /// Replace an existing robot.
    fn update(&self, robot: Robot) -> impl Future<Output = Result<Robot, RoboDeskError>> + Send;
}

/// Repository for persisting and querying [`Task`]s.
pub trait TaskRepository {
    /// Store a new task.
    fn create(&self, task: Task) -> impl Future<Output = Result<Task, RoboDeskError>> + Send;

    /// Get a task by its unique identifier.
    fn get_by_id(
        &self,
        id: TaskId,
    ) -> impl Future<Output = Result<Option<Task>, RoboDeskError>> + Send;

    /// Get the tasks owned by a robot, oldest first.
    fn find_by_robot(
        &self,
        robot_id: RobotId,
    ) -> impl Future<Output = Result<Vec<Task>, RoboDeskError>> + Send;

    /// Replace an existing task.
    fn update(&self, task: Task) -> impl Future<Output = Result<Task, RoboDeskError>> + Send;

    /// Delete a task by its unique identifier.
    fn delete(&self, id: TaskId) -> impl Future<Output = Result<(), RoboDeskError>> + Send;
}

impl<T: RobotRepository + Send + Sync> RobotRepository for Arc<T> {
    fn get_by_id(
        &self,
        id: RobotId,
    ) -> impl Future<Output = Result<Option<Robot>, RoboDeskError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Robot>, RoboDeskError>> + Send {
        (**self).get_all()
    }

    fn update(&self, robot: Robot) -> impl Future<Output = Result<Robot, RoboDeskError>> + Send {
        (**self).update(robot)
    }
}
