//! Quality inspection: a reviewer's score of one task run, shown in the
//! robot's inspection drawer.

use serde::{Deserialize, Serialize};

use crate::error::{RoboDeskError, ValidationError};
use crate::id::{InspectionId, RobotId};
use crate::time::{self, Timestamp};

/// Outcome of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    Failed,
    NeedsReview,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Failed => f.write_str("failed"),
            Self::NeedsReview => f.write_str("needs review"),
        }
    }
}

/// Scored review of a robot's work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInspection {
    pub id: InspectionId,
    pub robot_id: RobotId,
    pub task_name: String,
    /// Score in `0..=100`.
    pub score: u8,
    pub verdict: Verdict,
    pub remarks: String,
    pub inspected_at: Timestamp,
}

impl QualityInspection {
    /// Record an inspection made now.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreOutOfRange`] when `score > 100`.
    pub fn new(
        robot_id: RobotId,
        task_name: impl Into<String>,
        score: u8,
        verdict: Verdict,
        remarks: impl Into<String>,
    ) -> Result<Self, RoboDeskError> {
        if score > 100 {
            return Err(ValidationError::ScoreOutOfRange(score).into());
        }
        Ok(Self {
            id: InspectionId::new(),
            robot_id,
            task_name: task_name.into(),
            score,
            verdict,
            remarks: remarks.into(),
            inspected_at: time::now(),
        })
    }
}

/// Aggregate over a robot's inspections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectionSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub needs_review: usize,
    pub average_score: f64,
    /// `passed / total`, `0.0` when there are no inspections.
    pub pass_rate: f64,
}

impl InspectionSummary {
    #[must_use]
    pub fn from_inspections(inspections: &[QualityInspection]) -> Self {
        if inspections.is_empty() {
            return Self::default();
        }
        let count = |v: Verdict| inspections.iter().filter(|i| i.verdict == v).count();
        let total = inspections.len();
        let passed = count(Verdict::Passed);
        let score_sum: u32 = inspections.iter().map(|i| u32::from(i.score)).sum();

        #[allow(clippy::cast_precision_loss)]
        let (average_score, pass_rate) = (
            f64::from(score_sum) / total as f64,
            passed as f64 / total as f64,
        );

        Self {
            total,
            passed,
            failed: count(Verdict::Failed),
            needs_review: count(Verdict::NeedsReview),
            average_score,
            pass_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspection(score: u8, verdict: Verdict) -> QualityInspection {
        QualityInspection::new(RobotId::new(), "reply", score, verdict, "").unwrap()
    }

    #[test]
    fn should_reject_score_above_hundred() {
        let result = QualityInspection::new(RobotId::new(), "reply", 101, Verdict::Passed, "");
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::ScoreOutOfRange(101)))
        ));
    }

    #[test]
    fn should_return_empty_summary_when_no_inspections() {
        let summary = InspectionSummary::from_inspections(&[]);
        assert_eq!(summary, InspectionSummary::default());
    }

    #[test]
    fn should_count_verdicts_and_average_scores() {
        let summary = InspectionSummary::from_inspections(&[
            inspection(90, Verdict::Passed),
            inspection(40, Verdict::Failed),
            inspection(70, Verdict::NeedsReview),
            inspection(100, Verdict::Passed),
        ]);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.needs_review, 1);
        assert!((summary.average_score - 75.0).abs() < f64::EPSILON);
        assert!((summary.pass_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_serialize_verdict_snake_case() {
        let json = serde_json::to_string(&Verdict::NeedsReview).unwrap();
        assert_eq!(json, "\"needs_review\"");
    }
}
