//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoboDeskError`] via `#[from]`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RoboDeskError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("authentication error")]
    Auth(#[from] AuthError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("at least one condition and one action must be selected")]
    EmptySelection,

    #[error("template {id} is not available for category {category}")]
    UnknownTemplate { category: String, id: String },

    #[error("inspection score {0} is outside 0..=100")]
    ScoreOutOfRange(u8),

    #[error("username and password are required")]
    MissingCredentials,

    #[error("robot has no bound account")]
    NoBoundAccount,

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A looked-up record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Login or session resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("unknown or expired access token")]
    InvalidToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_robodesk_error() {
        let err: RoboDeskError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            RoboDeskError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Robot",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Robot abc not found");
    }

    #[test]
    fn should_display_unknown_template_with_context() {
        let err = ValidationError::UnknownTemplate {
            category: "customer_service".to_string(),
            id: "price_drop".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "template price_drop is not available for category customer_service"
        );
    }
}
