use crate::domain::assignment::{assignment::Assignment, availability_matrix::OccupancyMatrix, strategy::strategy_trait::Placement};
use crate::error::{Error, Result};

/// Re-attaches slot ids and court ids to a strategy's index placement.
///
/// `None` from the strategy becomes `InsufficientCapacity`. A placement that leaves a slot without a court
/// or points outside the matrix is rejected as inconsistent instead of being returned partially.
pub fn map_placement(matrix: &OccupancyMatrix, placement: Option<Placement>) -> Result<Assignment> {
    let placement = placement.ok_or(Error::InsufficientCapacity)?;

    if placement.court_of_slot.len() != matrix.number_of_slots() {
        return Err(Error::InconsistentPlacement(format!(
            "placement covers {} slots but {} were requested",
            placement.court_of_slot.len(),
            matrix.number_of_slots()
        )));
    }

    let mut entries = Vec::with_capacity(matrix.number_of_slots());

    for slot_index in 0..matrix.number_of_slots() {
        let slot_id = matrix
            .get_slot_id(slot_index)
            .ok_or_else(|| Error::InconsistentPlacement(format!("matrix has no slot in column {}", slot_index)))?;

        let court_index =
            placement.get_court_index(slot_index).ok_or_else(|| Error::InconsistentPlacement(format!("time slot {} has no court", slot_id)))?;

        let court_id = matrix
            .get_court_id(court_index)
            .ok_or_else(|| Error::InconsistentPlacement(format!("court index {} is outside the {} candidates", court_index, matrix.number_of_courts())))?;

        entries.push((slot_id, court_id));
    }

    Ok(Assignment::new(entries))
}
