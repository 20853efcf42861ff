//! Inspection repository port: read access to quality inspections.

use std::future::Future;

use robodesk_domain::error::RoboDeskError;
use robodesk_domain::id::RobotId;
use robodesk_domain::inspection::QualityInspection;

/// Repository for querying [`QualityInspection`]s.
pub trait InspectionRepository {
    /// Inspections of a robot, most recent first.
    fn find_by_robot(
        &self,
        robot_id: RobotId,
    ) -> impl Future<Output = Result<Vec<QualityInspection>, RoboDeskError>> + Send;
}
