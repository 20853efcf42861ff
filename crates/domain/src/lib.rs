//! # robodesk-domain
//!
//! Pure domain model for the robodesk "digital employee" dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Robots** (digital employees, their status and bound account)
//! - Define **Tasks** (condition → action rules a robot runs on a schedule)
//! - Define the **Template catalog** (condition/action options per category)
//! - Define the **Task wizard** (three-step form state and its gating rules)
//! - Define **Login** types (credentials, tokens, captcha, response shape)
//! - Define **Quality inspections** and their summary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! It is shared by the server crates and the WASM dashboard.

pub mod error;
pub mod id;
pub mod time;

pub mod auth;
pub mod inspection;
pub mod robot;
pub mod task;
pub mod template;
pub mod wizard;
