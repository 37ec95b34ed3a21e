use bimap::BiMap;
use std::collections::{HashMap, HashSet};

use crate::domain::model::court::Court;
use crate::domain::model::request::AssignmentRequest;
use crate::domain::repository::court_repository_trait::CourtRepository;
use crate::domain::utils::id::{CourtId, TimeSlotId};
use crate::error::{Error, Result};

/// Candidate courts × requested slots, `true` meaning the cell is free.
///
/// Rows are the candidate courts in ascending id order, which is the scan order of every strategy.
/// Columns follow the requested slot order. The matrix reflects the repository snapshot and is never
/// mutated by a solve; strategies work on a [`WorkingCopy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMatrix {
    court_ids: Vec<CourtId>,
    slot_columns: BiMap<TimeSlotId, usize>,
    cells: Vec<Vec<bool>>,
}

impl OccupancyMatrix {
    /// Builds the matrix from the candidate courts and the occupied slot ids per court.
    ///
    /// Occupied slots that were not requested are ignored. Duplicate court or slot ids are kept once.
    pub fn from_occupancy(courts: &[Court], requested_slot_ids: &[TimeSlotId], unavailable: &HashMap<CourtId, HashSet<TimeSlotId>>) -> Self {
        let mut court_ids: Vec<CourtId> = courts.iter().map(|court| court.id).collect();
        court_ids.sort();
        court_ids.dedup();

        let mut slot_columns: BiMap<TimeSlotId, usize> = BiMap::new();
        for slot_id in requested_slot_ids {
            if !slot_columns.contains_left(slot_id) {
                let column = slot_columns.len();
                slot_columns.insert(*slot_id, column);
            }
        }

        let empty = HashSet::new();
        let cells = court_ids
            .iter()
            .map(|court_id| {
                let occupied = unavailable.get(court_id).unwrap_or(&empty);
                (0..slot_columns.len())
                    .map(|column| slot_columns.get_by_right(&column).is_some_and(|slot_id| !occupied.contains(slot_id)))
                    .collect()
            })
            .collect();

        OccupancyMatrix { court_ids, slot_columns, cells }
    }

    pub fn number_of_courts(&self) -> usize {
        self.court_ids.len()
    }

    pub fn number_of_slots(&self) -> usize {
        self.slot_columns.len()
    }

    pub fn get_court_id(&self, court_index: usize) -> Option<CourtId> {
        self.court_ids.get(court_index).copied()
    }

    pub fn get_court_ids(&self) -> &[CourtId] {
        &self.court_ids
    }

    pub fn get_slot_id(&self, slot_index: usize) -> Option<TimeSlotId> {
        self.slot_columns.get_by_right(&slot_index).copied()
    }

    pub fn get_slot_index(&self, slot_id: &TimeSlotId) -> Option<usize> {
        self.slot_columns.get_by_left(slot_id).copied()
    }

    /// Out-of-range cells count as occupied.
    pub fn is_free(&self, court_index: usize, slot_index: usize) -> bool {
        self.cells.get(court_index).and_then(|row| row.get(slot_index)).copied().unwrap_or(false)
    }

    /// Fresh per-solve copy used to track tentative consumption.
    pub fn working_copy(&self) -> WorkingCopy {
        WorkingCopy { cells: self.cells.clone() }
    }
}

/// Mutable clone of the occupancy cells owned by exactly one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    cells: Vec<Vec<bool>>,
}

impl WorkingCopy {
    pub fn number_of_courts(&self) -> usize {
        self.cells.len()
    }

    pub fn is_free(&self, court_index: usize, slot_index: usize) -> bool {
        self.cells.get(court_index).and_then(|row| row.get(slot_index)).copied().unwrap_or(false)
    }

    pub fn is_free_for_all(&self, court_index: usize, slot_indices: &[usize]) -> bool {
        slot_indices.iter().all(|slot_index| self.is_free(court_index, *slot_index))
    }

    pub fn consume(&mut self, court_index: usize, slot_index: usize) {
        if let Some(cell) = self.cells.get_mut(court_index).and_then(|row| row.get_mut(slot_index)) {
            *cell = false;
        }
    }
}

/// Reads the candidate courts and their occupancy for the request date and builds the matrix.
///
/// Fails with `NoCandidateCourts` before reading any booking when the facility has no court of the category.
pub fn build_availability_matrix(repository: &dyn CourtRepository, request: &AssignmentRequest) -> Result<OccupancyMatrix> {
    let courts = repository.list_courts(request.facility_id, request.category_id)?;

    if courts.is_empty() {
        return Err(Error::NoCandidateCourts { facility: request.facility_id.to_string(), category: request.category_id.to_string() });
    }

    let unavailable = repository.list_unavailable_slots(request.facility_id, request.category_id, request.date)?;

    Ok(OccupancyMatrix::from_occupancy(&courts, &request.slots.get_slot_ids(), &unavailable))
}
