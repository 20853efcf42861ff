//! JSON handler for the wizard's template catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_domain::template::CategoryTemplates;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<CategoryTemplates>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/templates/:category`
pub async fn get<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    Path(category): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let templates = state.template_service.catalog_for(&category).await?;
    Ok(GetResponse::Ok(Json(templates)))
}
