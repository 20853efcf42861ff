//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use robodesk_domain::auth::{AccessToken, Credentials, LoginResponse, UserInfo};
use robodesk_domain::inspection::{InspectionSummary, QualityInspection};
use robodesk_domain::robot::Robot;
use robodesk_domain::task::{Task, TaskDraft};
use robodesk_domain::template::CategoryTemplates;
use serde::{Deserialize, Serialize};

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Sign in. Rejections come back as [`LoginResponse::Error`], not as `Err`;
/// `Err` is reserved for transport failures.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    let resp = Request::post("/api/login")
        .json(credentials)?
        .send()
        .await?;
    match resp.json::<LoginResponse>().await {
        Ok(body) => Ok(body),
        Err(_) => Err(ApiError {
            message: format!("HTTP {}", resp.status()),
        }),
    }
}

/// Resolve `token` to its user; `Err` once the server no longer knows it.
pub async fn fetch_session(token: &AccessToken) -> Result<UserInfo, ApiError> {
    let resp = Request::get("/api/session")
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await?;
    let resp = check_response(resp).await?;
    Ok(resp.json().await?)
}

/// Fetch all robots.
pub async fn fetch_robots() -> Result<Vec<Robot>, ApiError> {
    let resp = check_response(Request::get("/api/robots").send().await?).await?;
    Ok(resp.json().await?)
}

/// Fetch one robot.
pub async fn fetch_robot(id: &str) -> Result<Robot, ApiError> {
    let url = format!("/api/robots/{id}");
    let resp = check_response(Request::get(&url).send().await?).await?;
    Ok(resp.json().await?)
}

/// Remove the robot's bound platform account; returns the updated robot.
pub async fn unbind_account(robot_id: &str) -> Result<Robot, ApiError> {
    let url = format!("/api/robots/{robot_id}/account");
    let resp = check_response(Request::delete(&url).send().await?).await?;
    Ok(resp.json().await?)
}

/// Fetch the tasks a robot runs.
pub async fn fetch_tasks(robot_id: &str) -> Result<Vec<Task>, ApiError> {
    let url = format!("/api/robots/{robot_id}/tasks");
    let resp = check_response(Request::get(&url).send().await?).await?;
    Ok(resp.json().await?)
}

/// Hand a finished wizard draft to the server.
pub async fn create_task(draft: &TaskDraft) -> Result<Task, ApiError> {
    let url = format!("/api/robots/{}/tasks", draft.robot_id);
    let resp = check_response(Request::post(&url).json(draft)?.send().await?).await?;
    Ok(resp.json().await?)
}

/// Pause or resume a task.
pub async fn set_task_enabled(task_id: &str, enabled: bool) -> Result<Task, ApiError> {
    #[derive(Serialize)]
    struct SetEnabledRequest {
        enabled: bool,
    }

    let url = format!("/api/tasks/{task_id}/enabled");
    let resp = check_response(
        Request::put(&url)
            .json(&SetEnabledRequest { enabled })?
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

/// Delete a task.
pub async fn delete_task(task_id: &str) -> Result<(), ApiError> {
    let url = format!("/api/tasks/{task_id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}

/// Fetch the condition and action templates of a category.
pub async fn fetch_templates(category: &str) -> Result<CategoryTemplates, ApiError> {
    let url = format!("/api/templates/{category}");
    let resp = check_response(Request::get(&url).send().await?).await?;
    Ok(resp.json().await?)
}

/// Fetch inspection records, most recent first.
pub async fn fetch_inspections(robot_id: &str) -> Result<Vec<QualityInspection>, ApiError> {
    let url = format!("/api/robots/{robot_id}/inspections");
    let resp = check_response(Request::get(&url).send().await?).await?;
    Ok(resp.json().await?)
}

/// Fetch the aggregate of a robot's inspections.
pub async fn fetch_inspection_summary(robot_id: &str) -> Result<InspectionSummary, ApiError> {
    let url = format!("/api/robots/{robot_id}/inspections/summary");
    let resp = check_response(Request::get(&url).send().await?).await?;
    Ok(resp.json().await?)
}
