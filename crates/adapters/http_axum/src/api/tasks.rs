//! JSON REST handlers for tasks.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_domain::id::{RobotId, TaskId};
use robodesk_domain::task::{Task, TaskDraft};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for pausing or resuming a task.
#[derive(Deserialize)]
pub struct SetEnabledRequest {
    pub enabled: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Task>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Task>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the enable endpoint.
pub enum UpdateResponse {
    Ok(Json<Task>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/robots/:id/tasks`
pub async fn list<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robot_id: RobotId = parse_id(&id)?;
    let tasks = state.task_service.list_for_robot(robot_id).await?;
    Ok(ListResponse::Ok(Json(tasks)))
}

/// `POST /api/robots/:id/tasks`: body is the wizard's [`TaskDraft`].
pub async fn create<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
    Json(draft): Json<TaskDraft>,
) -> Result<CreateResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robot_id: RobotId = parse_id(&id)?;
    if draft.robot_id != robot_id {
        return Err(ApiError::invalid_id(&draft.robot_id.to_string()));
    }
    let task = state.task_service.create_from_draft(draft).await?;
    Ok(CreateResponse::Created(Json(task)))
}

/// `PUT /api/tasks/:id/enabled`
pub async fn set_enabled<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
    Json(req): Json<SetEnabledRequest>,
) -> Result<UpdateResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let task_id: TaskId = parse_id(&id)?;
    let task = state.task_service.set_enabled(task_id, req.enabled).await?;
    Ok(UpdateResponse::Ok(Json(task)))
}

/// `DELETE /api/tasks/:id`
pub async fn delete<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let task_id: TaskId = parse_id(&id)?;
    state.task_service.delete_task(task_id).await?;
    Ok(DeleteResponse::NoContent)
}
