use crate::domain::assignment::{
    assignment::Assignment, availability_matrix::OccupancyMatrix, result_mapper::map_placement, slot_grouper::ContiguousGroup,
    slot_grouper::group_contiguous_slots, strategy::strategy_trait::AssignmentStrategy,
};
use crate::domain::model::request::RequestedSlotSet;
use crate::error::{Error, Result};

/// Groups the requested slots, runs the strategy on the matrix and maps the result back to ids.
///
/// The matrix must have exactly one column per requested slot, in any order. Pure: no I/O and no
/// state survives the call.
pub fn solve(strategy: &dyn AssignmentStrategy, matrix: &OccupancyMatrix, slots: &RequestedSlotSet) -> Result<Assignment> {
    if matrix.number_of_slots() != slots.len() {
        return Err(Error::InconsistentPlacement(format!(
            "matrix has {} slot columns but {} slots were requested",
            matrix.number_of_slots(),
            slots.len()
        )));
    }

    if matrix.number_of_courts() == 0 {
        return Err(Error::InsufficientCapacity);
    }

    let groups = to_matrix_columns(matrix, slots, group_contiguous_slots(slots.get_slots()))?;
    let placement = strategy.solve(matrix, &groups);

    map_placement(matrix, placement)
}

/// Rewrites group members from positions in `slots` to the matrix columns of those slots.
fn to_matrix_columns(matrix: &OccupancyMatrix, slots: &RequestedSlotSet, groups: Vec<ContiguousGroup>) -> Result<Vec<ContiguousGroup>> {
    groups
        .into_iter()
        .map(|group| {
            group
                .get_slot_indices()
                .iter()
                .map(|position| {
                    let slot_id = slots.get_slots()[*position].id;
                    matrix
                        .get_slot_index(&slot_id)
                        .ok_or_else(|| Error::InconsistentPlacement(format!("requested slot {} has no matrix column", slot_id)))
                })
                .collect::<Result<Vec<usize>>>()
                .map(ContiguousGroup::new)
        })
        .collect()
}
