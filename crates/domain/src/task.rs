//! Task: a scheduled rule a robot runs: when one of its conditions holds,
//! perform its actions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{RoboDeskError, ValidationError};
use crate::id::{RobotId, TaskId, TemplateId};
use crate::time::{self, Timestamp};

/// How often the robot evaluates a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Realtime,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Every variant, in the order the wizard lists them.
    pub const ALL: [Self; 5] = [
        Self::Realtime,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
    ];

    /// Whether a time of day is meaningful for this frequency.
    #[must_use]
    pub fn uses_time(self) -> bool {
        matches!(self, Self::Daily | Self::Weekly | Self::Monthly)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realtime => "realtime",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidId(s.to_string()))
    }
}

/// What the wizard hands over on submit: the accumulated form plus the
/// identifying fields of the robot that owns the new task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub robot_id: RobotId,
    pub robot_name: String,
    pub robot_category: String,
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub time: String,
    pub conditions: Vec<TemplateId>,
    pub actions: Vec<TemplateId>,
}

/// A task owned by a robot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub robot_id: RobotId,
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    /// Time of day (`HH:MM`), empty for realtime and hourly tasks.
    pub time: String,
    pub conditions: Vec<TemplateId>,
    pub actions: Vec<TemplateId>,
    pub enabled: bool,
    pub created_at: Timestamp,
}

impl Task {
    /// Create a builder for constructing a [`Task`].
    #[must_use]
    pub fn builder() -> TaskBuilder {
        TaskBuilder::default()
    }

    /// Turn a wizard submission into a new, enabled task.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] when the draft breaks a task invariant.
    pub fn from_draft(draft: TaskDraft) -> Result<Self, RoboDeskError> {
        Self::builder()
            .robot_id(draft.robot_id)
            .name(draft.name)
            .description(draft.description)
            .frequency(draft.frequency)
            .time(draft.time)
            .conditions(draft.conditions)
            .actions(draft.actions)
            .build()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `conditions` or `actions` is empty ([`ValidationError::EmptySelection`])
    pub fn validate(&self) -> Result<(), RoboDeskError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.conditions.is_empty() || self.actions.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Task`].
#[derive(Debug, Default)]
pub struct TaskBuilder {
    id: Option<TaskId>,
    robot_id: Option<RobotId>,
    name: Option<String>,
    description: Option<String>,
    frequency: Option<Frequency>,
    time: Option<String>,
    conditions: Vec<TemplateId>,
    actions: Vec<TemplateId>,
    enabled: Option<bool>,
    created_at: Option<Timestamp>,
}

impl TaskBuilder {
    #[must_use]
    pub fn id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn robot_id(mut self, robot_id: RobotId) -> Self {
        self.robot_id = Some(robot_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn condition(mut self, id: impl Into<TemplateId>) -> Self {
        self.conditions.push(id.into());
        self
    }

    #[must_use]
    pub fn conditions(mut self, ids: Vec<TemplateId>) -> Self {
        self.conditions = ids;
        self
    }

    #[must_use]
    pub fn action(mut self, id: impl Into<TemplateId>) -> Self {
        self.actions.push(id.into());
        self
    }

    #[must_use]
    pub fn actions(mut self, ids: Vec<TemplateId>) -> Self {
        self.actions = ids;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Task`].
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] if required fields are missing or empty.
    pub fn build(self) -> Result<Task, RoboDeskError> {
        let frequency = self.frequency.unwrap_or_default();
        let time = if frequency.uses_time() {
            self.time.unwrap_or_default()
        } else {
            String::new()
        };
        let task = Task {
            id: self.id.unwrap_or_default(),
            robot_id: self.robot_id.unwrap_or_default(),
            name: self.name.unwrap_or_default().trim().to_string(),
            description: self.description.unwrap_or_default(),
            frequency,
            time,
            conditions: distinct(self.conditions),
            actions: distinct(self.actions),
            enabled: self.enabled.unwrap_or(true),
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        task.validate()?;
        Ok(task)
    }
}

/// Drop repeated template ids, keeping the first occurrence of each.
fn distinct(mut ids: Vec<TemplateId>) -> Vec<TemplateId> {
    let mut seen = BTreeSet::new();
    ids.retain(|id| seen.insert(id.clone()));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TaskDraft {
        TaskDraft {
            robot_id: RobotId::new(),
            robot_name: "Aria".to_string(),
            robot_category: "customer_service".to_string(),
            name: "daily sync".to_string(),
            description: String::new(),
            frequency: Frequency::Daily,
            time: "09:30".to_string(),
            conditions: vec!["new_message".into()],
            actions: vec!["auto_reply".into()],
        }
    }

    #[test]
    fn should_build_enabled_task_from_draft() {
        let d = draft();
        let robot_id = d.robot_id;
        let task = Task::from_draft(d).unwrap();
        assert_eq!(task.robot_id, robot_id);
        assert_eq!(task.time, "09:30");
        assert!(task.enabled);
    }

    #[test]
    fn should_drop_time_when_frequency_has_no_time_of_day() {
        let mut d = draft();
        d.frequency = Frequency::Hourly;
        let task = Task::from_draft(d).unwrap();
        assert!(task.time.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(matches!(
            Task::from_draft(d),
            Err(RoboDeskError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_actions_are_empty() {
        let result = Task::builder().name("x").condition("new_message").build();
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::EmptySelection))
        ));
    }

    #[test]
    fn should_trim_surrounding_whitespace_from_name() {
        let mut d = draft();
        d.name = "   padded   ".to_string();
        let task = Task::from_draft(d).unwrap();
        assert_eq!(task.name, "padded");
    }

    #[test]
    fn should_keep_each_template_once() {
        let mut d = draft();
        d.conditions = vec!["new_message".into(), "keyword_match".into(), "new_message".into()];
        d.actions = vec!["auto_reply".into(), "auto_reply".into()];
        let task = Task::from_draft(d).unwrap();
        assert_eq!(
            task.conditions,
            vec![TemplateId::from("new_message"), TemplateId::from("keyword_match")]
        );
        assert_eq!(task.actions, vec![TemplateId::from("auto_reply")]);
    }

    #[test]
    fn should_parse_frequency_from_lowercase_name() {
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert!("yearly".parse::<Frequency>().is_err());
    }

    #[test]
    fn should_serialize_frequency_lowercase() {
        let json = serde_json::to_string(&Frequency::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
    }
}
