//! # robodesk-adapter-sample
//!
//! In-memory adapter that implements every port of `robodesk-app` and seeds
//! it with sample data, so the dashboard has something to show.
//!
//! ## Sample content
//!
//! | Robot | Category | Status | Bound account |
//! |-------|----------|--------|---------------|
//! | Aria | `customer_service` | running | wecom |
//! | Quill | `content_ops` | idle | weibo |
//! | Ledger | `data_analysis` | running | none |
//! | Echo | `customer_service` | offline | taobao |
//!
//! Operators: `admin` / `admin123`, `operator` / `operator123`.
//!
//! ## Dependency rule
//!
//! Depends on `robodesk-app` (port traits) and `robodesk-domain` only.

mod error;
mod inspections;
mod robots;
pub mod seed;
mod tasks;
mod templates;
mod users;

use std::sync::Arc;

use robodesk_domain::error::RoboDeskError;

pub use error::StorageError;
pub use inspections::InMemoryInspectionRepository;
pub use robots::InMemoryRobotRepository;
pub use tasks::InMemoryTaskRepository;
pub use templates::StaticTemplateSource;
pub use users::{InMemorySessionStore, InMemoryUserDirectory};

/// Every store, ready to be injected into the services.
///
/// Robots and templates are shared by several services and are therefore
/// handed out behind [`Arc`].
pub struct SampleStores {
    pub robots: Arc<InMemoryRobotRepository>,
    pub tasks: InMemoryTaskRepository,
    pub inspections: InMemoryInspectionRepository,
    pub templates: Arc<StaticTemplateSource>,
    pub users: InMemoryUserDirectory,
    pub sessions: InMemorySessionStore,
}

impl SampleStores {
    /// Stores filled with the sample workforce.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a sample record breaks a domain invariant.
    pub fn seeded() -> Result<Self, RoboDeskError> {
        let (robots, tasks, inspections) = seed::workforce()?;
        tracing::debug!(
            robots = robots.len(),
            tasks = tasks.len(),
            inspections = inspections.len(),
            "seeding sample data"
        );
        Ok(Self {
            robots: Arc::new(InMemoryRobotRepository::new(robots)),
            tasks: InMemoryTaskRepository::new(tasks),
            inspections: InMemoryInspectionRepository::new(inspections),
            ..Self::bare()
        })
    }

    /// No robots, tasks or inspections; operators and templates only.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            robots: Arc::new(InMemoryRobotRepository::default()),
            tasks: InMemoryTaskRepository::default(),
            inspections: InMemoryInspectionRepository::default(),
            templates: Arc::new(StaticTemplateSource::new(seed::catalog())),
            users: InMemoryUserDirectory::new(seed::accounts()),
            sessions: InMemorySessionStore::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodesk_app::ports::{RobotRepository, TemplateSource, UserDirectory};

    #[tokio::test]
    async fn should_seed_four_robots() {
        let stores = SampleStores::seeded().unwrap();
        assert_eq!(stores.robots.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_keep_operators_and_templates_when_bare() {
        let stores = SampleStores::bare();
        assert!(stores.robots.get_all().await.unwrap().is_empty());
        assert!(stores.users.find_by_username("admin").await.unwrap().is_some());
        let catalog = stores.templates.catalog().await.unwrap();
        assert!(!catalog.conditions_for(seed::CUSTOMER_SERVICE).is_empty());
    }
}
