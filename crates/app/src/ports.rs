//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod auth;
pub mod inspection_repo;
pub mod storage;
pub mod template_source;

pub use auth::{SessionStore, UserDirectory};
pub use inspection_repo::InspectionRepository;
pub use storage::{RobotRepository, TaskRepository};
pub use template_source::TemplateSource;
