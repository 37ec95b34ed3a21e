use crate::domain::utils::id::{CategoryId, CourtId, FacilityId};

/// A physical court. Courts are managed elsewhere and are read-only while an assignment runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Court {
    pub id: CourtId,
    pub facility_id: FacilityId,
    pub category_id: CategoryId,
    pub name: String,
}

impl Court {
    pub fn new(id: CourtId, facility_id: FacilityId, category_id: CategoryId, name: impl Into<String>) -> Self {
        Court { id, facility_id, category_id, name: name.into() }
    }

    pub fn belongs_to(&self, facility_id: FacilityId, category_id: CategoryId) -> bool {
        self.facility_id == facility_id && self.category_id == category_id
    }
}
