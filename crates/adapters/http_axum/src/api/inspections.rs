//! JSON handlers for the quality-inspection drawer.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_domain::id::RobotId;
use robodesk_domain::inspection::{InspectionSummary, QualityInspection};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<QualityInspection>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the summary endpoint.
pub enum SummaryResponse {
    Ok(Json<InspectionSummary>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/robots/:id/inspections`
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
    let inspections = state.inspection_service.list_for_robot(robot_id).await?;
    Ok(ListResponse::Ok(Json(inspections)))
}

/// `GET /api/robots/:id/inspections/summary`
pub async fn summary<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(id): Path<String>,
) -> Result<SummaryResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let robot_id: RobotId = parse_id(&id)?;
    let summary = state.inspection_service.summary_for_robot(robot_id).await?;
    Ok(SummaryResponse::Ok(Json(summary)))
}
