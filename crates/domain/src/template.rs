//! Condition and action templates: the read-only catalog the task wizard
//! offers, keyed by robot category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::TemplateId;

/// A selectable trigger for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionOption {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
}

/// A selectable effect for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOption {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
}

/// The templates offered for one robot category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplates {
    pub conditions: Vec<ConditionOption>,
    pub actions: Vec<ActionOption>,
}

/// Every category's templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    categories: HashMap<String, CategoryTemplates>,
}

impl TemplateCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the templates of a category.
    #[must_use]
    pub fn with_category(
        mut self,
        category: impl Into<String>,
        templates: CategoryTemplates,
    ) -> Self {
        self.categories.insert(category.into(), templates);
        self
    }

    /// Templates of `category`, `None` when the category is unknown.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&CategoryTemplates> {
        self.categories.get(category)
    }

    /// Condition options of `category`; empty when the category is unknown.
    #[must_use]
    pub fn conditions_for(&self, category: &str) -> &[ConditionOption] {
        self.get(category)
            .map_or(&[], |templates| templates.conditions.as_slice())
    }

    /// Action options of `category`; empty when the category is unknown.
    #[must_use]
    pub fn actions_for(&self, category: &str) -> &[ActionOption] {
        self.get(category)
            .map_or(&[], |templates| templates.actions.as_slice())
    }

    #[must_use]
    pub fn contains_condition(&self, category: &str, id: &TemplateId) -> bool {
        self.conditions_for(category).iter().any(|c| &c.id == id)
    }

    #[must_use]
    pub fn contains_action(&self, category: &str, id: &TemplateId) -> bool {
        self.actions_for(category).iter().any(|a| &a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new().with_category(
            "customer_service",
            CategoryTemplates {
                conditions: vec![ConditionOption {
                    id: "new_message".into(),
                    name: "New message".to_string(),
                    description: "A customer sends a message".to_string(),
                }],
                actions: vec![ActionOption {
                    id: "auto_reply".into(),
                    name: "Auto reply".to_string(),
                    description: "Answer with the FAQ model".to_string(),
                }],
            },
        )
    }

    #[test]
    fn should_return_options_for_known_category() {
        let catalog = catalog();
        assert_eq!(catalog.conditions_for("customer_service").len(), 1);
        assert_eq!(catalog.actions_for("customer_service").len(), 1);
    }

    #[test]
    fn should_return_empty_options_for_unknown_category() {
        let catalog = catalog();
        assert!(catalog.conditions_for("finance").is_empty());
        assert!(catalog.actions_for("finance").is_empty());
    }

    #[test]
    fn should_check_membership_within_category_only() {
        let catalog = catalog().with_category("finance", CategoryTemplates::default());
        let id = TemplateId::from("new_message");
        assert!(catalog.contains_condition("customer_service", &id));
        assert!(!catalog.contains_condition("finance", &id));
        assert!(!catalog.contains_action("customer_service", &id));
    }
}
