//! # robodesk-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RobotRepository`: read and update robots
//!   - `TaskRepository`: CRUD for tasks
//!   - `InspectionRepository`: query quality inspections
//!   - `TemplateSource`: the condition/action catalog
//!   - `UserDirectory` / `SessionStore`: login and issued tokens
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthService`: login, token resolution
//!   - `RobotService`: list, get, unbind account
//!   - `TaskService`: create from a wizard draft, list, enable/pause, delete
//!   - `TemplateService`: catalog lookup per category
//!   - `InspectionService`: inspection list and summary
//!
//! ## Dependency rule
//! Depends on `robodesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
