//! Typed identifier newtypes.
//!
//! Records with a lifecycle (robots, tasks, users, inspections) use random
//! UUIDs. Catalog templates use stable, human-readable string keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Robot`](crate::robot::Robot).
    RobotId
);

define_id!(
    /// Unique identifier for a [`Task`](crate::task::Task).
    TaskId
);

define_id!(
    /// Unique identifier for a [`UserInfo`](crate::auth::UserInfo).
    UserId
);

define_id!(
    /// Unique identifier for a [`QualityInspection`](crate::inspection::QualityInspection).
    InspectionId
);

/// Stable key of a condition or action template, e.g. `"new_message"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = RobotId::new();
        let b = RobotId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = TaskId::new();
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        assert!(RobotId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn should_serialize_template_id_as_plain_string() {
        let id = TemplateId::new("new_message");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"new_message\"");
    }

    #[test]
    fn should_order_template_ids_lexicographically() {
        let a = TemplateId::from("auto_reply");
        let b = TemplateId::from("send_report");
        assert!(a < b);
    }
}
