//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod inspections;
#[allow(clippy::missing_errors_doc)]
pub mod login;
#[allow(clippy::missing_errors_doc)]
pub mod robots;
#[allow(clippy::missing_errors_doc)]
pub mod tasks;
#[allow(clippy::missing_errors_doc)]
pub mod templates;

use std::str::FromStr;

use axum::Router;
use axum::routing::{delete, get, post, put};

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path segment into a typed identifier.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| ApiError::invalid_id(raw))
}

/// Build the `/api` sub-router.
pub fn routes<RR, TR, TS, IR, U, S>() -> Router<AppState<RR, TR, TS, IR, U, S>>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        // Session
        .route("/login", post(login::login::<RR, TR, TS, IR, U, S>))
        .route("/session", get(login::session::<RR, TR, TS, IR, U, S>))
        // Robots
        .route("/robots", get(robots::list::<RR, TR, TS, IR, U, S>))
        .route("/robots/{id}", get(robots::get::<RR, TR, TS, IR, U, S>))
        .route(
            "/robots/{id}/account",
            delete(robots::unbind_account::<RR, TR, TS, IR, U, S>),
        )
        // Tasks
        .route(
            "/robots/{id}/tasks",
            get(tasks::list::<RR, TR, TS, IR, U, S>).post(tasks::create::<RR, TR, TS, IR, U, S>),
        )
        .route(
            "/tasks/{id}/enabled",
            put(tasks::set_enabled::<RR, TR, TS, IR, U, S>),
        )
        .route("/tasks/{id}", delete(tasks::delete::<RR, TR, TS, IR, U, S>))
        // Templates
        .route(
            "/templates/{category}",
            get(templates::get::<RR, TR, TS, IR, U, S>),
        )
        // Inspections
        .route(
            "/robots/{id}/inspections",
            get(inspections::list::<RR, TR, TS, IR, U, S>),
        )
        .route(
            "/robots/{id}/inspections/summary",
            get(inspections::summary::<RR, TR, TS, IR, U, S>),
        )
}
