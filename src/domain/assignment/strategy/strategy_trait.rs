use std::fmt::Debug;

use crate::domain::assignment::{availability_matrix::OccupancyMatrix, slot_grouper::ContiguousGroup};

/// Court index chosen for every matrix column, `None` where a strategy left a column untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub court_of_slot: Vec<Option<usize>>,
}

impl Placement {
    pub fn new(number_of_slots: usize) -> Self {
        Placement { court_of_slot: vec![None; number_of_slots] }
    }

    pub fn assign(&mut self, slot_index: usize, court_index: usize) {
        if let Some(entry) = self.court_of_slot.get_mut(slot_index) {
            *entry = Some(court_index);
        }
    }

    pub fn get_court_index(&self, slot_index: usize) -> Option<usize> {
        self.court_of_slot.get(slot_index).copied().flatten()
    }
}

/// Decides which court index takes each requested slot.
///
/// Implementations must not mutate the matrix and must be deterministic for identical input.
/// `None` means at least one slot has no free court; no partial placement is ever returned.
pub trait AssignmentStrategy: Send + Sync + Debug {
    fn get_name(&self) -> &'static str;

    fn solve(&self, matrix: &OccupancyMatrix, groups: &[ContiguousGroup]) -> Option<Placement>;
}
