//! Robot: a "digital employee" operating under a category and, optionally,
//! a bound third-party account.

use serde::{Deserialize, Serialize};

use crate::error::{RoboDeskError, ValidationError};
use crate::id::RobotId;
use crate::time::{self, Timestamp};

/// Operational status shown on the robot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    Running,
    #[default]
    Idle,
    Offline,
}

impl std::fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Idle => f.write_str("idle"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// Third-party account a robot works through (e.g. a shop's support inbox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundAccount {
    pub platform: String,
    pub account_name: String,
    pub bound_at: Timestamp,
}

/// A managed digital employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub name: String,
    /// Category key selecting the condition/action catalog, e.g. `"customer_service"`.
    pub category: String,
    pub status: RobotStatus,
    pub description: String,
    pub bound_account: Option<BoundAccount>,
    pub created_at: Timestamp,
}

impl Robot {
    /// Create a builder for constructing a [`Robot`].
    #[must_use]
    pub fn builder() -> RobotBuilder {
        RobotBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] when `name` or `category` is empty.
    pub fn validate(&self) -> Result<(), RoboDeskError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(())
    }

    /// Detach the bound account, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoBoundAccount`] when nothing is bound.
    pub fn unbind(&mut self) -> Result<BoundAccount, RoboDeskError> {
        self.bound_account
            .take()
            .ok_or_else(|| ValidationError::NoBoundAccount.into())
    }
}

/// Step-by-step builder for [`Robot`].
#[derive(Debug, Default)]
pub struct RobotBuilder {
    id: Option<RobotId>,
    name: Option<String>,
    category: Option<String>,
    status: Option<RobotStatus>,
    description: Option<String>,
    bound_account: Option<BoundAccount>,
    created_at: Option<Timestamp>,
}

impl RobotBuilder {
    #[must_use]
    pub fn id(mut self, id: RobotId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: RobotStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bind an account at the current time.
    #[must_use]
    pub fn bound_account(
        mut self,
        platform: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        self.bound_account = Some(BoundAccount {
            platform: platform.into(),
            account_name: account_name.into(),
            bound_at: time::now(),
        });
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Robot`].
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] if `name` or `category` is missing or empty.
    pub fn build(self) -> Result<Robot, RoboDeskError> {
        let robot = Robot {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            bound_account: self.bound_account,
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        robot.validate()?;
        Ok(robot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_robot() -> Robot {
        Robot::builder()
            .name("Aria")
            .category("customer_service")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_robot_when_name_and_category_provided() {
        let robot = valid_robot();
        assert_eq!(robot.name, "Aria");
        assert_eq!(robot.status, RobotStatus::Idle);
        assert!(robot.bound_account.is_none());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Robot::builder().category("customer_service").build();
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_category_is_blank() {
        let result = Robot::builder().name("Aria").category("  ").build();
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::EmptyCategory))
        ));
    }

    #[test]
    fn should_return_account_when_unbinding_bound_robot() {
        let mut robot = Robot::builder()
            .name("Aria")
            .category("customer_service")
            .bound_account("wecom", "support@shop")
            .build()
            .unwrap();

        let account = robot.unbind().unwrap();
        assert_eq!(account.account_name, "support@shop");
        assert!(robot.bound_account.is_none());
    }

    #[test]
    fn should_reject_unbind_when_no_account_bound() {
        let mut robot = valid_robot();
        assert!(matches!(
            robot.unbind(),
            Err(RoboDeskError::Validation(ValidationError::NoBoundAccount))
        ));
    }

    #[test]
    fn should_serialize_status_lowercase() {
        let json = serde_json::to_string(&RobotStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
    }
}
