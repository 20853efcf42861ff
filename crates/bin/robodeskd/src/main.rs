//! # robodeskd: robodesk daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the in-memory stores (adapters), seeded or bare
//! - Construct application services, injecting stores via port traits
//! - Build the axum router, optionally serving the dashboard bundle
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use robodesk_adapter_http_axum::router;
use robodesk_adapter_http_axum::state::AppState;
use robodesk_adapter_sample::SampleStores;
use robodesk_app::services::auth_service::AuthService;
use robodesk_app::services::inspection_service::InspectionService;
use robodesk_app::services::robot_service::RobotService;
use robodesk_app::services::task_service::TaskService;
use robodesk_app::services::template_service::TemplateService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading robodesk.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Stores
    let stores = if config.sample.seed_enabled {
        SampleStores::seeded().context("seeding sample data")?
    } else {
        SampleStores::bare()
    };

    // Services
    let auth_service = AuthService::new(stores.users, stores.sessions);
    let robot_service = RobotService::new(stores.robots.clone());
    let task_service = TaskService::new(
        stores.tasks,
        stores.robots.clone(),
        stores.templates.clone(),
    );
    let template_service = TemplateService::new(stores.templates);
    let inspection_service = InspectionService::new(stores.inspections, stores.robots);

    // HTTP
    let state = AppState::new(
        auth_service,
        robot_service,
        task_service,
        template_service,
        inspection_service,
    );
    let mut app = router::build(state);
    if let Some(dir) = &config.dashboard.dir {
        tracing::info!(dir = %dir.display(), "serving dashboard");
        app = router::with_dashboard(app, dir);
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "robodeskd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("robodeskd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
