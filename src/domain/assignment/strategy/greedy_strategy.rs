use crate::domain::assignment::{
    availability_matrix::{OccupancyMatrix, WorkingCopy},
    slot_grouper::ContiguousGroup,
    strategy::strategy_trait::{AssignmentStrategy, Placement},
};

/// First-fit placement that keeps contiguous groups on one court whenever possible.
///
/// Groups are handled in the given order. A group goes to the first court (ascending id) whose cells are
/// all still free; if no court can take the whole group, each slot of the group goes to the first court
/// that is free for that slot alone. A slot without any free court fails the whole solve.
///
/// This is a greedy heuristic: an unlucky group order can split a group that a full bipartite matching
/// would have kept together, or fail a request a matching would satisfy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        GreedyStrategy
    }

    fn find_court_for_group(working_copy: &WorkingCopy, group: &ContiguousGroup) -> Option<usize> {
        (0..working_copy.number_of_courts()).find(|court_index| working_copy.is_free_for_all(*court_index, group.get_slot_indices()))
    }

    fn find_court_for_slot(working_copy: &WorkingCopy, slot_index: usize) -> Option<usize> {
        (0..working_copy.number_of_courts()).find(|court_index| working_copy.is_free(*court_index, slot_index))
    }
}

impl AssignmentStrategy for GreedyStrategy {
    fn get_name(&self) -> &'static str {
        "Greedy"
    }

    fn solve(&self, matrix: &OccupancyMatrix, groups: &[ContiguousGroup]) -> Option<Placement> {
        if matrix.number_of_courts() == 0 {
            return None;
        }

        let mut working_copy = matrix.working_copy();
        let mut placement = Placement::new(matrix.number_of_slots());

        for group in groups {
            if let Some(court_index) = Self::find_court_for_group(&working_copy, group) {
                for slot_index in group.get_slot_indices() {
                    working_copy.consume(court_index, *slot_index);
                    placement.assign(*slot_index, court_index);
                }
                continue;
            }

            // Split the group
            for slot_index in group.get_slot_indices() {
                let court_index = Self::find_court_for_slot(&working_copy, *slot_index)?;
                working_copy.consume(court_index, *slot_index);
                placement.assign(*slot_index, court_index);
            }
        }

        Some(placement)
    }
}
