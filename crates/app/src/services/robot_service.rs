//! Robot service: use-cases for the robot cards and the unbind modal.

use robodesk_domain::error::{NotFoundError, RoboDeskError};
use robodesk_domain::id::RobotId;
use robodesk_domain::robot::Robot;

use crate::ports::RobotRepository;

/// Application service for robot queries and account unbinding.
pub struct RobotService<R> {
    repo: R,
}

impl<R: RobotRepository> RobotService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all robots.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_robots(&self) -> Result<Vec<Robot>, RoboDeskError> {
        self.repo.get_all().await
    }

    /// Look up a robot by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] when no robot with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_robot(&self, id: RobotId) -> Result<Robot, RoboDeskError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Robot",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Detach the robot's third-party account.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown robot,
    /// [`RoboDeskError::Validation`] when no account is bound, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn unbind_account(&self, id: RobotId) -> Result<Robot, RoboDeskError> {
        let mut robot = self.get_robot(id).await?;
        let account = robot.unbind()?;
        tracing::info!(platform = %account.platform, account = %account.account_name, "account unbound");
        self.repo.update(robot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodesk_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRobotRepo {
        store: Mutex<HashMap<RobotId, Robot>>,
    }

    impl InMemoryRobotRepo {
        fn with(robots: Vec<Robot>) -> Self {
            Self {
                store: Mutex::new(robots.into_iter().map(|r| (r.id, r)).collect()),
            }
        }
    }

    impl RobotRepository for InMemoryRobotRepo {
        fn get_by_id(
            &self,
            id: RobotId,
        ) -> impl Future<Output = Result<Option<Robot>, RoboDeskError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Robot>, RoboDeskError>> + Send {
            let result: Vec<Robot> = self.store.lock().unwrap().values().cloned().collect();
            async { Ok(result) }
        }

        fn update(&self, robot: Robot) -> impl Future<Output = Result<Robot, RoboDeskError>> + Send {
            self.store.lock().unwrap().insert(robot.id, robot.clone());
            async { Ok(robot) }
        }
    }

    fn bound_robot() -> Robot {
        Robot::builder()
            .name("Aria")
            .category("customer_service")
            .bound_account("wecom", "support@shop")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_all_robots() {
        let svc = RobotService::new(InMemoryRobotRepo::with(vec![
            bound_robot(),
            Robot::builder()
                .name("Quill")
                .category("content")
                .build()
                .unwrap(),
        ]));
        assert_eq!(svc.list_robots().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_robot_missing() {
        let svc = RobotService::new(InMemoryRobotRepo::default());
        let result = svc.get_robot(RobotId::new()).await;
        assert!(matches!(result, Err(RoboDeskError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_persist_unbound_robot() {
        let robot = bound_robot();
        let id = robot.id;
        let svc = RobotService::new(InMemoryRobotRepo::with(vec![robot]));

        let updated = svc.unbind_account(id).await.unwrap();
        assert!(updated.bound_account.is_none());

        let fetched = svc.get_robot(id).await.unwrap();
        assert!(fetched.bound_account.is_none());
    }

    #[tokio::test]
    async fn should_reject_second_unbind() {
        let robot = bound_robot();
        let id = robot.id;
        let svc = RobotService::new(InMemoryRobotRepo::with(vec![robot]));

        svc.unbind_account(id).await.unwrap();
        let result = svc.unbind_account(id).await;
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::NoBoundAccount))
        ));
    }
}
