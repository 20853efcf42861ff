//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use robodesk_domain::error::{RoboDeskError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoboDeskError`] to an HTTP response with appropriate status code.
pub struct ApiError(RoboDeskError);

impl ApiError {
    /// A path segment that should have been an identifier.
    pub fn invalid_id(raw: &str) -> Self {
        Self(ValidationError::InvalidId(raw.to_string()).into())
    }

    /// Status code this error is answered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RoboDeskError::Validation(_) => StatusCode::BAD_REQUEST,
            RoboDeskError::NotFound(_) => StatusCode::NOT_FOUND,
            RoboDeskError::Auth(_) => StatusCode::UNAUTHORIZED,
            RoboDeskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; storage details stay in the logs.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.0 {
            RoboDeskError::Validation(err) => err.to_string(),
            RoboDeskError::NotFound(err) => err.to_string(),
            RoboDeskError::Auth(err) => err.to_string(),
            RoboDeskError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                "internal server error".to_string()
            }
        }
    }
}

impl From<RoboDeskError> for ApiError {
    fn from(err: RoboDeskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}
