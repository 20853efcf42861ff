//! JSON REST handlers for robots.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_domain::id::RobotId;
use robodesk_domain::robot::Robot;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Robot>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and unbind endpoints.
pub enum RobotResponse {
    Ok(Json<Robot>),
}

impl IntoResponse for RobotResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/robots`
pub async fn list<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
) -> Result<ListResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robots = state.robot_service.list_robots().await?;
    Ok(ListResponse::Ok(Json(robots)))
}

/// `GET /api/robots/:id`
pub async fn get<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
) -> Result<RobotResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robot_id: RobotId = parse_id(&id)?;
    let robot = state.robot_service.get_robot(robot_id).await?;
    Ok(RobotResponse::Ok(Json(robot)))
}

/// `DELETE /api/robots/:id/account`
pub async fn unbind_account<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
) -> Result<RobotResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robot_id: RobotId = parse_id(&id)?;
    let robot = state.robot_service.unbind_account(robot_id).await?;
    Ok(RobotResponse::Ok(Json(robot)))
}
