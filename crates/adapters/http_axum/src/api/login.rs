//! Login and session handlers.
//!
//! `POST /api/login` answers with the dashboard's login envelope
//! (`{"status": "success", ...}` / `{"status": "error", ...}`) instead of the
//! generic `{ "error": ... }` body used elsewhere. A body that does not
//! deserialize into credentials counts as missing credentials.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};
use robodesk_domain::auth::{AccessToken, Credentials, LoginResponse, UserInfo};
use robodesk_domain::error::{AuthError, RoboDeskError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the login endpoint.
pub enum LoginReply {
    Ok(Json<LoginResponse>),
    Rejected(StatusCode, Json<LoginResponse>),
}

impl LoginReply {
    fn rejected(err: RoboDeskError) -> Self {
        let err = ApiError::from(err);
        Self::Rejected(
            err.status(),
            Json(LoginResponse::Error {
                message: err.message(),
            }),
        )
    }
}

impl IntoResponse for LoginReply {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Rejected(status, json) => (status, json).into_response(),
        }
    }
}

/// Possible responses from the session endpoint.
pub enum SessionResponse {
    Ok(Json<UserInfo>),
}

impl IntoResponse for SessionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/login`
pub async fn login<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<LoginReply, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let Json(credentials) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "unreadable login body");
            return Ok(LoginReply::rejected(
                ValidationError::MissingCredentials.into(),
            ));
        }
    };
    match state.auth_service.login(credentials).await {
        Ok(success) => Ok(LoginReply::Ok(Json(success.into()))),
        Err(err @ (RoboDeskError::Auth(_) | RoboDeskError::Validation(_))) => {
            Ok(LoginReply::rejected(err))
        }
        Err(err) => Err(err.into()),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| AccessToken::from_string(token.trim()))
}

/// `GET /api/session`: the user behind the `Authorization: Bearer` token.
pub async fn session<RR, TR, TS, IR, U, S>(
    State(state): State<AppState<RR, TR, TS, IR, U, S>>,
    headers: HeaderMap,
) -> Result<SessionResponse, ApiError>
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::from(RoboDeskError::from(AuthError::InvalidToken)))?;
    let user = state.auth_service.whoami(&token).await?;
    Ok(SessionResponse::Ok(Json(user)))
}
