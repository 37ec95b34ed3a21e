use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::domain::model::booking::{BookingDetail, BookingStatus};
use crate::domain::utils::id::{CourtId, TimeSlotId};

/// Complete slot → court mapping of one request, kept in requested slot order.
///
/// Only the result mapper builds it, and only when every requested slot has a court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<(TimeSlotId, CourtId)>,
}

impl Assignment {
    pub(crate) fn new(entries: Vec<(TimeSlotId, CourtId)>) -> Self {
        Assignment { entries }
    }

    pub fn court_for(&self, time_slot_id: TimeSlotId) -> Option<CourtId> {
        self.entries.iter().find(|(slot_id, _)| *slot_id == time_slot_id).map(|(_, court_id)| *court_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TimeSlotId, CourtId)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct courts used, ascending.
    pub fn courts_used(&self) -> BTreeSet<CourtId> {
        self.entries.iter().map(|(_, court_id)| *court_id).collect()
    }

    pub fn into_map(self) -> HashMap<TimeSlotId, CourtId> {
        self.entries.into_iter().collect()
    }

    /// Booking cells the caller persists for this assignment, all pending.
    pub fn to_bookings(&self, date: NaiveDate) -> Vec<BookingDetail> {
        self.entries.iter().map(|(slot_id, court_id)| BookingDetail::new(*court_id, *slot_id, date, BookingStatus::Pending)).collect()
    }
}
