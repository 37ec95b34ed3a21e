#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};

use court_slot_engine::domain::model::booking::{BookingDetail, BookingStatus};
use court_slot_engine::domain::model::court::Court;
use court_slot_engine::domain::model::request::AssignmentRequest;
use court_slot_engine::domain::model::time_slot::TimeSlot;
use court_slot_engine::domain::repository::in_memory::{BookingKey, InMemoryCourtRepository};
use court_slot_engine::domain::utils::id::{CategoryId, CourtId, FacilityId, TimeSlotId};

pub const FACILITY: u64 = 1;
pub const CATEGORY: u64 = 1;

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()
}

/// Hourly slot whose id is its start hour, e.g. slot 9 is 09:00-10:00.
pub fn hour_slot(hour: u32) -> TimeSlot {
    TimeSlot::new(
        TimeSlotId::new(hour as u64),
        FacilityId::new(FACILITY),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
    )
    .unwrap()
}

pub fn court_id(id: u64) -> CourtId {
    CourtId::new(id)
}

pub fn slot_id(hour: u32) -> TimeSlotId {
    TimeSlotId::new(hour as u64)
}

/// Repository with the given courts in the test category plus one court of another category.
pub fn repository_with_courts(court_ids: &[u64]) -> InMemoryCourtRepository {
    let repository = InMemoryCourtRepository::new();

    for id in court_ids {
        repository
            .add_court(Court::new(CourtId::new(*id), FacilityId::new(FACILITY), CategoryId::new(CATEGORY), format!("Court {}", id)))
            .unwrap();
    }

    repository.add_court(Court::new(CourtId::new(900), FacilityId::new(FACILITY), CategoryId::new(CATEGORY + 1), "Padel")).unwrap();
    repository
}

pub fn book(repository: &InMemoryCourtRepository, court: u64, hour: u32) -> BookingKey {
    repository.add_booking(BookingDetail::new(CourtId::new(court), slot_id(hour), date(), BookingStatus::Confirmed)).unwrap()
}

pub fn request(hours: &[u32]) -> AssignmentRequest {
    AssignmentRequest::new(FacilityId::new(FACILITY), CategoryId::new(CATEGORY), date(), hours.iter().map(|hour| hour_slot(*hour)).collect()).unwrap()
}

pub fn data_path(file_name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), file_name)
}
