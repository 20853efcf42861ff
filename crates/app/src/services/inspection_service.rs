//! Inspection service: data behind the quality-inspection drawer.

use robodesk_domain::error::{NotFoundError, RoboDeskError};
use robodesk_domain::id::RobotId;
use robodesk_domain::inspection::{InspectionSummary, QualityInspection};

use crate::ports::{InspectionRepository, RobotRepository};

/// Application service for quality inspections.
pub struct InspectionService<IR, RR> {
    inspections: IR,
    robots: RR,
}

impl<IR: InspectionRepository, RR: RobotRepository> InspectionService<IR, RR> {
    /// Create a new service from its ports.
    pub fn new(inspections: IR, robots: RR) -> Self {
        Self {
            inspections,
            robots,
        }
    }

    /// Inspections of a robot, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::NotFound`] for an unknown robot, or a
    /// storage error from the ports.
    pub async fn list_for_robot(
        &self,
        robot_id: RobotId,
    ) -> Result<Vec<QualityInspection>, RoboDeskError> {
        if self.robots.get_by_id(robot_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Robot",
                id: robot_id.to_string(),
            }
            .into());
        }
        let mut inspections = self.inspections.find_by_robot(robot_id).await?;
        inspections.sort_by(|a, b| b.inspected_at.cmp(&a.inspected_at));
        Ok(inspections)
    }

    /// Verdict counts, average score and pass rate for a robot.
    ///
    /// # Errors
    ///
    /// Same as [`list_for_robot`](Self::list_for_robot).
    pub async fn summary_for_robot(
        &self,
        robot_id: RobotId,
    ) -> Result<InspectionSummary, RoboDeskError> {
        let inspections = self.list_for_robot(robot_id).await?;
        Ok(InspectionSummary::from_inspections(&inspections))
    }
}
