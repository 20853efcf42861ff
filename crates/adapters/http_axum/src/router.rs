//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use robodesk_app::ports::{
    InspectionRepository, RobotRepository, SessionStore, TaskRepository, TemplateSource,
    UserDirectory,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and adds `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR, TR, TS, IR, U, S>(state: AppState<RR, TR, TS, IR, U, S>) -> Router
where
    RR: RobotRepository + Send + Sync + 'static,
    TR: TaskRepository + Send + Sync + 'static,
    TS: TemplateSource + Send + Sync + 'static,
    IR: InspectionRepository + Send + Sync + 'static,
    U: UserDirectory + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the compiled dashboard from `dir` for every path the API does not
/// claim. Unknown paths fall back to `index.html` so client-side routes
/// survive a reload.
#[must_use]
pub fn with_dashboard(router: Router, dir: &Path) -> Router {
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).fallback(index))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use robodesk_adapter_sample::SampleStores;
    use robodesk_app::services::auth_service::AuthService;
    use robodesk_app::services::inspection_service::InspectionService;
    use robodesk_app::services::robot_service::RobotService;
    use robodesk_app::services::task_service::TaskService;
    use robodesk_app::services::template_service::TemplateService;
    use tower::ServiceExt;

    fn app(stores: SampleStores) -> Router {
        let state = AppState::new(
            AuthService::new(stores.users, stores.sessions),
            RobotService::new(stores.robots.clone()),
            TaskService::new(stores.tasks, stores.robots.clone(), stores.templates.clone()),
            TemplateService::new(stores.templates),
            InspectionService::new(stores.inspections, stores.robots),
        );
        build(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_malformed_robot_id() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .uri("/api/robots/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid identifier: not-a-uuid");
    }

    #[tokio::test]
    async fn should_answer_login_rejection_with_status_envelope() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"admin","password":"nope"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "invalid username or password");
    }

    #[tokio::test]
    async fn should_answer_blank_login_with_bad_request() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"","password":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["status"], "error");
    }

    #[tokio::test]
    async fn should_answer_login_without_password_field_with_envelope() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"admin"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn should_require_bearer_token_for_session() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .uri("/api/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_category() {
        let response = app(SampleStores::bare())
            .oneshot(
                Request::builder()
                    .uri("/api/templates/astrology")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
