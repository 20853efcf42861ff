//! In-memory [`InspectionRepository`].

use std::sync::RwLock;

use robodesk_app::ports::InspectionRepository;
use robodesk_domain::error::RoboDeskError;
use robodesk_domain::id::RobotId;
use robodesk_domain::inspection::QualityInspection;

use crate::error::StorageError;

/// Read-only inspection records.
#[derive(Debug, Default)]
pub struct InMemoryInspectionRepository {
    inspections: RwLock<Vec<QualityInspection>>,
}

impl InMemoryInspectionRepository {
    #[must_use]
    pub fn new(inspections: Vec<QualityInspection>) -> Self {
        Self {
            inspections: RwLock::new(inspections),
        }
    }
}

impl InspectionRepository for InMemoryInspectionRepository {
    async fn find_by_robot(
        &self,
        robot_id: RobotId,
    ) -> Result<Vec<QualityInspection>, RoboDeskError> {
        let inspections = self
            .inspections
            .read()
            .map_err(|_| StorageError::Poisoned { store: "inspection" })?;
        Ok(inspections
            .iter()
            .filter(|i| i.robot_id == robot_id)
            .cloned()
            .collect())
    }
}
