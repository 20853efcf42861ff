//! Shared application state for axum handlers.

use std::sync::Arc;

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_app::services::auth_service::AuthService;
use robodesk_app::services::inspection_service::InspectionService;
use robodesk_app::services::robot_service::RobotService;
use robodesk_app::services::task_service::TaskService;
use robodesk_app::services::template_service::TemplateService;

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch:
/// robots `RR`, tasks `TR`, templates `TS`, inspections `IR`, user
/// directory `U` and session store `S`. `Clone` is implemented manually so
/// the underlying types themselves do not need to be `Clone`; only the
/// `Arc` wrappers are cloned.
pub struct AppState<RR, TR, TS, IR, U, S> {
    /// Login and token resolution.
    pub auth_service: Arc<AuthService<U, S>>,
    /// Robot queries and account unbinding.
    pub robot_service: Arc<RobotService<RR>>,
    /// Task creation and management.
    pub task_service: Arc<TaskService<TR, RR, TS>>,
    /// Condition/action catalog.
    pub template_service: Arc<TemplateService<TS>>,
    /// Quality inspections.
    pub inspection_service: Arc<InspectionService<IR, RR>>,
}

impl<RR, TR, TS, IR, U, S> Clone for AppState<RR, TR, TS, IR, U, S> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            robot_service: Arc::clone(&self.robot_service),
            task_service: Arc::clone(&self.task_service),
            template_service: Arc::clone(&self.template_service),
            inspection_service: Arc::clone(&self.inspection_service),
        }
    }
}

impl<RR, TR, TS, IR, U, S> AppState<RR, TR, TS, IR, U, S>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        auth_service: AuthService<U, S>,
        robot_service: RobotService<RR>,
        task_service: TaskService<TR, RR, TS>,
        template_service: TemplateService<TS>,
        inspection_service: InspectionService<IR, RR>,
    ) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
            robot_service: Arc::new(robot_service),
            task_service: Arc::new(task_service),
            template_service: Arc::new(template_service),
            inspection_service: Arc::new(inspection_service),
        }
    }
}
