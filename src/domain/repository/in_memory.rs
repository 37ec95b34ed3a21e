use chrono::NaiveDate;
use slotmap::{SlotMap, new_key_type};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::assignment::assignment::Assignment;
use crate::domain::model::booking::{BookingDetail, BookingStatus};
use crate::domain::model::court::Court;
use crate::domain::repository::court_repository_trait::CourtRepository;
use crate::domain::utils::id::{CategoryId, CourtId, FacilityId, TimeSlotId};
use crate::error::{Error, Result};

new_key_type! {
    pub struct BookingKey;
}

#[derive(Debug, Default)]
struct StoreInner {
    courts: Vec<Court>,

    /// Booking storage, one entry per reserved (court, slot, date) cell.
    bookings: SlotMap<BookingKey, BookingDetail>,
}

/// Court and booking store kept in memory. Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourtRepository {
    /// Courts and bookings are protected with a single lock.
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryCourtRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>> {
        self.inner.read().map_err(|_| Error::Repository("court store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>> {
        self.inner.write().map_err(|_| Error::Repository("court store lock poisoned".to_string()))
    }

    pub fn add_court(&self, court: Court) -> Result<()> {
        let mut guard = self.write()?;

        if guard.courts.iter().any(|known| known.id == court.id) {
            return Err(Error::Repository(format!("court {} already exists", court.id)));
        }

        guard.courts.push(court);
        Ok(())
    }

    /// Adds a booking cell to the store.
    ///
    /// # Returns
    /// Returns the BookingKey (internal key of the store).
    pub fn add_booking(&self, booking: BookingDetail) -> Result<BookingKey> {
        let mut guard = self.write()?;
        Ok(guard.bookings.insert(booking))
    }

    /// Marks a booking as cancelled, which frees its cell.
    ///
    /// # Returns
    /// `false` if no booking with this key exists.
    pub fn cancel_booking(&self, key: BookingKey) -> Result<bool> {
        let mut guard = self.write()?;

        match guard.bookings.get_mut(key) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_booking(&self, key: BookingKey) -> Result<Option<BookingDetail>> {
        let guard = self.read()?;
        Ok(guard.bookings.get(key).cloned())
    }

    /// Persists an assignment as pending booking cells.
    ///
    /// Availability is not checked again here: a commit based on a stale snapshot is accepted and
    /// produces a double booking. Callers serialize read-assign-commit per facility and date.
    pub fn commit_assignment(&self, assignment: &Assignment, date: NaiveDate) -> Result<Vec<BookingKey>> {
        let mut guard = self.write()?;
        let keys = assignment.to_bookings(date).into_iter().map(|booking| guard.bookings.insert(booking)).collect();

        Ok(keys)
    }

    /// Number of non-cancelled bookings holding the given cell.
    pub fn count_active_bookings(&self, court_id: CourtId, time_slot_id: TimeSlotId, date: NaiveDate) -> Result<usize> {
        let guard = self.read()?;
        Ok(guard.bookings.values().filter(|booking| booking.blocks(court_id, time_slot_id, date)).count())
    }
}

impl CourtRepository for InMemoryCourtRepository {
    fn list_courts(&self, facility_id: FacilityId, category_id: CategoryId) -> Result<Vec<Court>> {
        let guard = self.read()?;
        Ok(guard.courts.iter().filter(|court| court.belongs_to(facility_id, category_id)).cloned().collect())
    }

    fn list_unavailable_slots(
        &self,
        facility_id: FacilityId,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Result<HashMap<CourtId, HashSet<TimeSlotId>>> {
        let guard = self.read()?;

        let candidate_courts: HashSet<CourtId> =
            guard.courts.iter().filter(|court| court.belongs_to(facility_id, category_id)).map(|court| court.id).collect();

        let mut unavailable: HashMap<CourtId, HashSet<TimeSlotId>> = HashMap::new();

        for booking in guard.bookings.values() {
            if booking.date != date || !booking.status.occupies_court() || !candidate_courts.contains(&booking.court_id) {
                continue;
            }

            unavailable.entry(booking.court_id).or_default().insert(booking.time_slot_id);
        }

        Ok(unavailable)
    }
}
