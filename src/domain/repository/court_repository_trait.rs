use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

use crate::domain::model::court::Court;
use crate::domain::utils::id::{CategoryId, CourtId, FacilityId, TimeSlotId};
use crate::error::Result;

/// Read-only persistence capability the assignment engine consumes.
///
/// Both queries are called at most once per assignment and their combined answer is treated as a snapshot.
/// Callers must hold a per-facility, per-date lock (or rely on a unique constraint at commit time) around
/// "read availability, assign, commit"; the engine itself does not prevent two requests from seeing the
/// same free cell.
pub trait CourtRepository: std::fmt::Debug + Send + Sync {
    /// All courts of the facility and category, fully booked ones included.
    fn list_courts(&self, facility_id: FacilityId, category_id: CategoryId) -> Result<Vec<Court>>;

    /// For each court, the slot ids held by a non-cancelled booking on `date`.
    ///
    /// Courts without any such booking may be absent from the map.
    fn list_unavailable_slots(
        &self,
        facility_id: FacilityId,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Result<HashMap<CourtId, HashSet<TimeSlotId>>>;
}
