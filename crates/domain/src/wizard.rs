//! Task-creation wizard: a three-step linear form.
//!
//! 1. **Basic info**: name, description, frequency, time of day.
//! 2. **Conditions**: pick at least one condition template.
//! 3. **Actions**: pick at least one action template.
//!
//! The state lives for as long as the wizard is open. Forward navigation out
//! of step 1 needs a name; submission needs both selections to be non-empty.
//! Submitting consumes the state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{RoboDeskError, ValidationError};
use crate::id::TemplateId;
use crate::robot::Robot;
use crate::task::{Frequency, TaskDraft};

/// Position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Conditions,
    Actions,
}

impl WizardStep {
    /// One-based step number as shown in the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Conditions => 2,
            Self::Actions => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic info",
            Self::Conditions => "Conditions",
            Self::Actions => "Actions",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Conditions),
            Self::Conditions => Some(Self::Actions),
            Self::Actions => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Conditions => Some(Self::BasicInfo),
            Self::Actions => Some(Self::Conditions),
        }
    }
}

/// Form state of an open wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    step: WizardStep,
    name: String,
    description: String,
    frequency: Frequency,
    time: String,
    selected_conditions: BTreeSet<TemplateId>,
    selected_actions: BTreeSet<TemplateId>,
}

impl WizardState {
    /// Fresh state, positioned on the first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn selected_conditions(&self) -> &BTreeSet<TemplateId> {
        &self.selected_conditions
    }

    #[must_use]
    pub fn selected_actions(&self) -> &BTreeSet<TemplateId> {
        &self.selected_actions
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    /// Move one step forward; no-op on the last step.
    ///
    /// Does not consult [`can_advance`](Self::can_advance): the "Next" control
    /// is disabled instead. Use [`try_advance`](Self::try_advance) for a
    /// checked move.
    pub fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Move one step back; no-op on the first step.
    pub fn retreat(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Advance only when allowed. Returns whether the step changed.
    pub fn try_advance(&mut self) -> bool {
        let before = self.step;
        if self.can_advance() {
            self.advance();
        }
        self.step != before
    }

    /// False only while on step 1 with an empty name.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !(self.step == WizardStep::BasicInfo && self.name.is_empty())
    }

    /// True once at least one condition and one action are selected.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.selected_conditions.is_empty() && !self.selected_actions.is_empty()
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::Actions
    }

    /// Select `id` if absent, deselect it if present.
    pub fn toggle_condition(&mut self, id: TemplateId) {
        toggle(&mut self.selected_conditions, id);
    }

    /// Select `id` if absent, deselect it if present.
    pub fn toggle_action(&mut self, id: TemplateId) {
        toggle(&mut self.selected_actions, id);
    }

    /// Consume the state and produce the draft for `robot`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySelection`] when [`can_submit`](Self::can_submit)
    /// is false, or [`ValidationError::EmptyName`] when the name is empty.
    pub fn submit(self, robot: &Robot) -> Result<TaskDraft, RoboDeskError> {
        if !self.can_submit() {
            return Err(ValidationError::EmptySelection.into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(TaskDraft {
            robot_id: robot.id,
            robot_name: robot.name.clone(),
            robot_category: robot.category.clone(),
            name: self.name.trim().to_string(),
            description: self.description,
            frequency: self.frequency,
            time: self.time,
            conditions: self.selected_conditions.into_iter().collect(),
            actions: self.selected_actions.into_iter().collect(),
        })
    }
}

fn toggle(set: &mut BTreeSet<TemplateId>, id: TemplateId) {
    if !set.remove(&id) {
        set.insert(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot() -> Robot {
        Robot::builder()
            .name("Aria")
            .category("customer_service")
            .build()
            .unwrap()
    }

    fn ready_state() -> WizardState {
        let mut state = WizardState::new();
        state.set_name("daily sync");
        state.toggle_condition("new_message".into());
        state.toggle_action("auto_reply".into());
        state
    }

    #[test]
    fn should_start_on_basic_info_step() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::BasicInfo);
        assert_eq!(state.step().number(), 1);
    }

    #[test]
    fn should_block_advance_when_name_empty_on_first_step() {
        let mut state = WizardState::new();
        assert!(!state.can_advance());

        state.set_name("daily sync");
        assert!(state.can_advance());

        state.advance();
        assert_eq!(state.step(), WizardStep::Conditions);
    }

    #[test]
    fn should_allow_advance_past_first_step_regardless_of_name() {
        let mut state = WizardState::new();
        state.set_name("x");
        state.advance();
        state.set_name("");
        assert!(state.can_advance());
    }

    #[test]
    fn should_not_advance_past_last_step() {
        let mut state = WizardState::new();
        state.advance();
        state.advance();
        assert!(state.is_last_step());
        state.advance();
        assert_eq!(state.step(), WizardStep::Actions);
    }

    #[test]
    fn should_not_retreat_before_first_step() {
        let mut state = WizardState::new();
        state.retreat();
        assert_eq!(state.step(), WizardStep::BasicInfo);

        state.advance();
        state.retreat();
        assert_eq!(state.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn should_refuse_checked_advance_without_name() {
        let mut state = WizardState::new();
        assert!(!state.try_advance());
        assert_eq!(state.step(), WizardStep::BasicInfo);

        state.set_name("daily sync");
        assert!(state.try_advance());
        assert_eq!(state.step(), WizardStep::Conditions);
    }

    #[test]
    fn should_restore_selection_when_condition_toggled_twice() {
        let mut state = WizardState::new();
        state.toggle_condition("keyword_hit".into());
        let before = state.selected_conditions().clone();

        state.toggle_condition("new_message".into());
        state.toggle_condition("new_message".into());

        assert_eq!(state.selected_conditions(), &before);
    }

    #[test]
    fn should_restore_selection_when_action_toggled_twice() {
        let mut state = WizardState::new();
        state.toggle_action("auto_reply".into());
        state.toggle_action("auto_reply".into());
        assert!(state.selected_actions().is_empty());
    }

    #[test]
    fn should_not_allow_submit_when_either_selection_empty() {
        let mut state = WizardState::new();
        assert!(!state.can_submit());

        state.toggle_condition("new_message".into());
        assert!(!state.can_submit());

        state.toggle_action("auto_reply".into());
        assert!(state.can_submit());

        state.toggle_condition("new_message".into());
        assert!(!state.can_submit());
    }

    #[test]
    fn should_emit_draft_with_robot_identity_on_submit() {
        let robot = robot();
        let mut state = ready_state();
        state.set_frequency(Frequency::Weekly);
        state.set_time("08:00");

        let draft = state.submit(&robot).unwrap();
        assert_eq!(draft.robot_id, robot.id);
        assert_eq!(draft.robot_name, "Aria");
        assert_eq!(draft.robot_category, "customer_service");
        assert_eq!(draft.name, "daily sync");
        assert_eq!(draft.frequency, Frequency::Weekly);
        assert_eq!(draft.conditions, vec![TemplateId::from("new_message")]);
        assert_eq!(draft.actions, vec![TemplateId::from("auto_reply")]);
    }

    #[test]
    fn should_emit_selections_in_sorted_order() {
        let mut state = ready_state();
        state.toggle_action("escalate".into());
        let draft = state.submit(&robot()).unwrap();
        assert_eq!(
            draft.actions,
            vec![TemplateId::from("auto_reply"), TemplateId::from("escalate")]
        );
    }

    #[test]
    fn should_reject_submit_when_selection_incomplete() {
        let mut state = WizardState::new();
        state.set_name("daily sync");
        state.toggle_condition("new_message".into());
        assert!(matches!(
            state.submit(&robot()),
            Err(RoboDeskError::Validation(ValidationError::EmptySelection))
        ));
    }

    #[test]
    fn should_reject_submit_when_name_blank() {
        let mut state = ready_state();
        state.set_name("  ");
        assert!(matches!(
            state.submit(&robot()),
            Err(RoboDeskError::Validation(ValidationError::EmptyName))
        ));
    }
}
