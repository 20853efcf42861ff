//! Template service: catalog lookup for the task wizard.

use robodesk_domain::error::{NotFoundError, RoboDeskError};
use robodesk_domain::template::CategoryTemplates;

use crate::ports::TemplateSource;

/// Application service exposing the condition/action catalog.
pub struct TemplateService<T> {
    source: T,
}

impl<T: TemplateSource> TemplateService<T> {
    /// Create a new service backed by the given source.
    pub fn new(source: T) -> Self {
        Self { source }
    }

    /// Templates offered to robots of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown category, or a
    /// storage error from the source.
    pub async fn catalog_for(&self, category: &str) -> Result<CategoryTemplates, RoboDeskError> {
        let catalog = self.source.catalog().await?;
        catalog.get(category).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Category",
                id: category.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodesk_domain::template::{ConditionOption, TemplateCatalog};
    use std::future::Future;

    struct StaticSource;

    impl TemplateSource for StaticSource {
        fn catalog(&self) -> impl Future<Output = Result<TemplateCatalog, RoboDeskError>> + Send {
            let catalog = TemplateCatalog::new().with_category(
                "customer_service",
                CategoryTemplates {
                    conditions: vec![ConditionOption {
                        id: "new_message".into(),
                        name: "New message".to_string(),
                        description: String::new(),
                    }],
                    actions: vec![],
                },
            );
            async { Ok(catalog) }
        }
    }

    #[tokio::test]
    async fn should_return_templates_for_known_category() {
        let svc = TemplateService::new(StaticSource);
        let templates = svc.catalog_for("customer_service").await.unwrap();
        assert_eq!(templates.conditions.len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_category() {
        let svc = TemplateService::new(StaticSource);
        let result = svc.catalog_for("finance").await;
        assert!(matches!(result, Err(RoboDeskError::NotFound(_))));
    }
}
