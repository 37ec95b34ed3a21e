use chrono::NaiveTime;

use crate::domain::utils::id::{FacilityId, TimeSlotId};
use crate::error::ConversionError;

/// A fixed bookable interval offered by a facility. `start < end` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub facility_id: FacilityId,
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(id: TimeSlotId, facility_id: FacilityId, start: NaiveTime, end: NaiveTime) -> Result<Self, ConversionError> {
        if start >= end {
            return Err(ConversionError::InvalidTimeSlot { id: id.value, start: start.format("%H:%M").to_string(), end: end.format("%H:%M").to_string() });
        }

        Ok(TimeSlot { id, facility_id, start, end })
    }

    pub fn get_start(&self) -> NaiveTime {
        self.start
    }

    pub fn get_end(&self) -> NaiveTime {
        self.end
    }

    /// `true` if `next` begins exactly where this slot ends.
    pub fn is_followed_by(&self, next: &TimeSlot) -> bool {
        self.end == next.start
    }
}

/// Parses `HH:MM` (or `HH:MM:SS`) into a `NaiveTime`.
pub fn parse_time(value: &str) -> Result<NaiveTime, ConversionError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ConversionError::InvalidTime(value.to_string()))
}
