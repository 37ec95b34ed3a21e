use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::model::time_slot::TimeSlot;
use crate::domain::utils::id::{CategoryId, FacilityId, TimeSlotId};
use crate::error::{Error, Result};

/// The distinct time slots one booking asks for, in the order the caller listed them.
///
/// A slot id listed twice is kept once, at its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedSlotSet {
    slots: Vec<TimeSlot>,
}

impl RequestedSlotSet {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        let mut seen: HashSet<TimeSlotId> = HashSet::new();
        let slots = slots.into_iter().filter(|slot| seen.insert(slot.id)).collect();

        RequestedSlotSet { slots }
    }

    pub fn get_slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn get_slot_ids(&self) -> Vec<TimeSlotId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Input of one assignment call.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    pub facility_id: FacilityId,
    pub category_id: CategoryId,
    pub date: NaiveDate,
    pub slots: RequestedSlotSet,
}

impl AssignmentRequest {
    /// Validates the request the way the booking workflow does before the engine sees it.
    pub fn new(facility_id: FacilityId, category_id: CategoryId, date: NaiveDate, slots: Vec<TimeSlot>) -> Result<Self> {
        if slots.is_empty() {
            return Err(Error::InvalidRequest("no time slots were requested".to_string()));
        }

        if let Some(foreign) = slots.iter().find(|slot| slot.facility_id != facility_id) {
            return Err(Error::InvalidRequest(format!(
                "time slot {} belongs to facility {} but the request targets facility {}",
                foreign.id, foreign.facility_id, facility_id
            )));
        }

        Ok(AssignmentRequest { facility_id, category_id, date, slots: RequestedSlotSet::new(slots) })
    }
}
