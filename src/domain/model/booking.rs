use chrono::NaiveDate;
use std::str::FromStr;

use crate::domain::utils::id::{CourtId, TimeSlotId};
use crate::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Every booking that was not cancelled keeps its court occupied for the slot.
    pub fn occupies_court(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Completed" => Ok(BookingStatus::Completed),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(ConversionError::UnknownBookingStatus(s.to_string())),
        }
    }
}

/// One reserved (court, slot, date) cell of an existing booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetail {
    pub court_id: CourtId,
    pub time_slot_id: TimeSlotId,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

impl BookingDetail {
    pub fn new(court_id: CourtId, time_slot_id: TimeSlotId, date: NaiveDate, status: BookingStatus) -> Self {
        BookingDetail { court_id, time_slot_id, date, status }
    }

    pub fn blocks(&self, court_id: CourtId, time_slot_id: TimeSlotId, date: NaiveDate) -> bool {
        self.status.occupies_court() && self.court_id == court_id && self.time_slot_id == time_slot_id && self.date == date
    }
}
