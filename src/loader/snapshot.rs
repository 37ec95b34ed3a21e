use chrono::NaiveDate;
use std::collections::HashMap;
use std::str::FromStr;

use crate::api::request_dto::AssignmentRequestDto;
use crate::api::snapshot_dto::FacilitySnapshotDto;
use crate::domain::model::booking::{BookingDetail, BookingStatus};
use crate::domain::model::court::Court;
use crate::domain::model::request::AssignmentRequest;
use crate::domain::model::time_slot::{TimeSlot, parse_time};
use crate::domain::repository::in_memory::InMemoryCourtRepository;
use crate::domain::utils::id::{CategoryId, CourtId, FacilityId, TimeSlotId};
use crate::error::{ConversionError, Error, Result};
use crate::loader::parser::parse_json_file;

pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, ConversionError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ConversionError::InvalidDate(value.to_string()))
}

/// One facility's courts, slot catalogue and existing bookings, loaded into an in-memory repository.
#[derive(Debug, Clone)]
pub struct FacilitySnapshot {
    pub facility_id: FacilityId,
    pub repository: InMemoryCourtRepository,
    time_slots: HashMap<TimeSlotId, TimeSlot>,
}

impl FacilitySnapshot {
    pub fn from_file(file_path: &str) -> Result<Self> {
        let dto: FacilitySnapshotDto = parse_json_file(file_path)?;
        let snapshot = FacilitySnapshot::try_from(dto)?;

        log::info!("Loaded facility {} from '{}' ({} time slots).", snapshot.facility_id, file_path, snapshot.time_slots.len());
        Ok(snapshot)
    }

    pub fn get_time_slot(&self, time_slot_id: TimeSlotId) -> Option<&TimeSlot> {
        self.time_slots.get(&time_slot_id)
    }

    /// Resolves the requested slot ids against the slot catalogue and validates the request.
    pub fn resolve_request(&self, dto: &AssignmentRequestDto) -> Result<AssignmentRequest> {
        let date = parse_date(&dto.date)?;

        let slots = dto
            .time_slot_ids
            .iter()
            .map(|id| self.get_time_slot(TimeSlotId::new(*id)).cloned().ok_or(ConversionError::UnknownTimeSlot(*id)))
            .collect::<std::result::Result<Vec<TimeSlot>, ConversionError>>()?;

        AssignmentRequest::new(FacilityId::new(dto.facility_id), CategoryId::new(dto.category_id), date, slots)
    }
}

impl TryFrom<FacilitySnapshotDto> for FacilitySnapshot {
    type Error = Error;

    fn try_from(dto: FacilitySnapshotDto) -> Result<Self> {
        let facility_id = FacilityId::new(dto.facility_id);
        let repository = InMemoryCourtRepository::new();

        for court in dto.courts {
            let name = if court.name.is_empty() { format!("Court {}", court.id) } else { court.name };
            repository.add_court(Court::new(CourtId::new(court.id), facility_id, CategoryId::new(court.category_id), name))?;
        }

        let mut time_slots = HashMap::new();
        for slot in dto.time_slots {
            let time_slot = TimeSlot::new(TimeSlotId::new(slot.id), facility_id, parse_time(&slot.start)?, parse_time(&slot.end)?)?;
            time_slots.insert(time_slot.id, time_slot);
        }

        for booking in dto.bookings {
            let status = BookingStatus::from_str(&booking.status)?;
            let detail = BookingDetail::new(CourtId::new(booking.court_id), TimeSlotId::new(booking.time_slot_id), parse_date(&booking.date)?, status);
            repository.add_booking(detail)?;
        }

        Ok(FacilitySnapshot { facility_id, repository, time_slots })
    }
}
