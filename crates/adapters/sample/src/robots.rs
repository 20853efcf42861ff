//! In-memory [`RobotRepository`].

use std::sync::RwLock;

use robodesk_app::ports::RobotRepository;
use robodesk_domain::error::{NotFoundError, RoboDeskError};
use robodesk_domain::id::RobotId;
use robodesk_domain::robot::Robot;

use crate::error::StorageError;

const STORE: &str = "robot";

/// Robots kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRobotRepository {
    robots: RwLock<Vec<Robot>>,
}

impl InMemoryRobotRepository {
    #[must_use]
    pub fn new(robots: Vec<Robot>) -> Self {
        Self {
            robots: RwLock::new(robots),
        }
    }
}

impl RobotRepository for InMemoryRobotRepository {
    async fn get_by_id(&self, id: RobotId) -> Result<Option<Robot>, RoboDeskError> {
        let robots = self
            .robots
            .read()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        Ok(robots.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Robot>, RoboDeskError> {
        let robots = self
            .robots
            .read()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        Ok(robots.clone())
    }

    async fn update(&self, robot: Robot) -> Result<Robot, RoboDeskError> {
        let mut robots = self
            .robots
            .write()
            .map_err(|_| StorageError::Poisoned { store: STORE })?;
        let slot = robots
            .iter_mut()
            .find(|r| r.id == robot.id)
            .ok_or_else(|| NotFoundError {
                entity: "Robot",
                id: robot.id.to_string(),
            })?;
        *slot = robot.clone();
        Ok(robot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot(name: &str) -> Robot {
        Robot::builder()
            .name(name)
            .category("customer_service")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_keep_insertion_order() {
        let repo = InMemoryRobotRepository::new(vec![robot("Aria"), robot("Quill")]);
        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Aria", "Quill"]);
    }

    #[tokio::test]
    async fn should_replace_robot_on_update() {
        let original = robot("Aria");
        let id = original.id;
        let repo = InMemoryRobotRepository::new(vec![original.clone()]);

        let mut renamed = original;
        renamed.name = "Aria II".to_string();
        repo.update(renamed).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Aria II");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_robot() {
        let repo = InMemoryRobotRepository::default();
        let result = repo.update(robot("Ghost")).await;
        assert!(matches!(result, Err(RoboDeskError::NotFound(_))));
    }
}
