//! # robodesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the dashboard
//!   (`/api/login`, `/api/robots`, `/api/robots/{id}/tasks`, `/api/templates/{category}`, …)
//! - Optionally serve the compiled **Leptos dashboard** bundle as static files
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `robodesk-app` (for port traits and services) and `robodesk-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
