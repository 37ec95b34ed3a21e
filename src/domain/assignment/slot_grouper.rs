use std::collections::HashSet;

use crate::domain::model::time_slot::TimeSlot;
use crate::domain::utils::id::TimeSlotId;

/// A maximal run of requested slots whose intervals chain end-to-start.
///
/// The grouper fills it with positions in the requested slot set; strategies receive matrix columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContiguousGroup {
    slot_indices: Vec<usize>,
}

impl ContiguousGroup {
    pub fn new(slot_indices: Vec<usize>) -> Self {
        ContiguousGroup { slot_indices }
    }

    pub fn get_slot_indices(&self) -> &[usize] {
        &self.slot_indices
    }

    pub fn len(&self) -> usize {
        self.slot_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_indices.is_empty()
    }
}

/// Partitions the requested slots into contiguous groups ordered by earliest start time.
///
/// Slots are sorted by start time (slot id breaks ties) and a new group starts whenever a slot does not
/// begin exactly where the previous one ended. Repeated slot ids only count at their first position.
pub fn group_contiguous_slots(slots: &[TimeSlot]) -> Vec<ContiguousGroup> {
    let mut seen: HashSet<TimeSlotId> = HashSet::new();
    let mut order: Vec<usize> = (0..slots.len()).filter(|index| seen.insert(slots[*index].id)).collect();
    order.sort_by_key(|index| (slots[*index].get_start(), slots[*index].id));

    let mut groups: Vec<ContiguousGroup> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for index in order {
        if let Some(&previous) = current.last() {
            if !slots[previous].is_followed_by(&slots[index]) {
                groups.push(ContiguousGroup::new(std::mem::take(&mut current)));
            }
        }
        current.push(index);
    }

    if !current.is_empty() {
        groups.push(ContiguousGroup::new(current));
    }

    groups
}
