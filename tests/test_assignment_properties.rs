mod common;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

use common::*;
use court_slot_engine::domain::assignment::availability_matrix::OccupancyMatrix;
use court_slot_engine::domain::assignment::engine::solve;
use court_slot_engine::domain::assignment::slot_grouper::group_contiguous_slots;
use court_slot_engine::domain::assignment::strategy::greedy_strategy::GreedyStrategy;
use court_slot_engine::domain::model::court::Court;
use court_slot_engine::domain::model::request::RequestedSlotSet;
use court_slot_engine::domain::utils::id::{CategoryId, CourtId, FacilityId, TimeSlotId};
use court_slot_engine::Error;

const RUNS: u64 = 300;

struct Case {
    courts: Vec<Court>,
    slots: RequestedSlotSet,
    unavailable: HashMap<CourtId, HashSet<TimeSlotId>>,
}

impl Case {
    fn matrix(&self) -> OccupancyMatrix {
        OccupancyMatrix::from_occupancy(&self.courts, &self.slots.get_slot_ids(), &self.unavailable)
    }
}

/// Random facility with up to 6 courts and a shuffled request of up to 8 hourly slots.
fn random_case(rng: &mut StdRng, occupancy: f64) -> Case {
    let number_of_courts = rng.random_range(1..=6);
    let mut court_ids: Vec<u64> = (1..=20).collect();
    court_ids.shuffle(rng);

    let courts: Vec<Court> = court_ids[..number_of_courts]
        .iter()
        .map(|id| Court::new(CourtId::new(*id), FacilityId::new(FACILITY), CategoryId::new(CATEGORY), format!("Court {}", id)))
        .collect();

    let mut hours: Vec<u32> = (6..=22).collect();
    hours.shuffle(rng);
    let number_of_slots = rng.random_range(1..=8);
    let slots = RequestedSlotSet::new(hours[..number_of_slots].iter().map(|hour| hour_slot(*hour)).collect());

    let mut unavailable: HashMap<CourtId, HashSet<TimeSlotId>> = HashMap::new();
    for court in &courts {
        for hour in 6..=22 {
            if rng.random_bool(occupancy) {
                unavailable.entry(court.id).or_default().insert(slot_id(hour));
            }
        }
    }

    Case { courts, slots, unavailable }
}

#[test]
fn test_success_is_a_complete_mapping_onto_free_cells() {
    let mut rng = StdRng::seed_from_u64(7);
    let strategy = GreedyStrategy::new();

    for _ in 0..RUNS {
        let case = random_case(&mut rng, 0.4);
        let matrix = case.matrix();
        let candidates: HashSet<CourtId> = case.courts.iter().map(|court| court.id).collect();

        let every_slot_has_a_free_court =
            (0..matrix.number_of_slots()).all(|slot_index| (0..matrix.number_of_courts()).any(|court_index| matrix.is_free(court_index, slot_index)));

        match solve(&strategy, &matrix, &case.slots) {
            Ok(assignment) => {
                assert!(every_slot_has_a_free_court);
                assert_eq!(assignment.len(), case.slots.len());

                let assigned: HashSet<TimeSlotId> = assignment.iter().map(|(slot, _)| *slot).collect();
                assert_eq!(assigned, case.slots.get_slot_ids().into_iter().collect::<HashSet<_>>());

                for (slot, court) in assignment.iter() {
                    assert!(candidates.contains(court));
                    assert!(!case.unavailable.get(court).is_some_and(|occupied| occupied.contains(slot)), "slot {} put on occupied court {}", slot, court);
                }
            }
            Err(error) => {
                assert!(matches!(error, Error::InsufficientCapacity));
                assert!(!every_slot_has_a_free_court);
            }
        }
    }
}

#[test]
fn test_identical_input_gives_identical_assignment() {
    let mut rng = StdRng::seed_from_u64(11);
    let strategy = GreedyStrategy::new();

    for _ in 0..RUNS {
        let case = random_case(&mut rng, 0.3);

        let first = solve(&strategy, &case.matrix(), &case.slots).ok();
        let second = solve(&strategy, &case.matrix(), &case.slots).ok();

        assert_eq!(first, second);
    }
}

#[test]
fn test_free_facility_keeps_every_group_on_lowest_court() {
    let mut rng = StdRng::seed_from_u64(23);
    let strategy = GreedyStrategy::new();

    for _ in 0..RUNS {
        let mut case = random_case(&mut rng, 0.0);
        case.unavailable.clear();

        let lowest = case.courts.iter().map(|court| court.id).min().unwrap();
        let assignment = solve(&strategy, &case.matrix(), &case.slots).unwrap();

        assert_eq!(assignment.courts_used().into_iter().collect::<Vec<_>>(), vec![lowest]);

        for group in group_contiguous_slots(case.slots.get_slots()) {
            let courts: HashSet<CourtId> =
                group.get_slot_indices().iter().map(|index| assignment.court_for(case.slots.get_slots()[*index].id).unwrap()).collect();
            assert_eq!(courts.len(), 1);
        }
    }
}

#[test]
fn test_group_stays_together_whenever_some_court_is_free_for_it() {
    let mut rng = StdRng::seed_from_u64(31);
    let strategy = GreedyStrategy::new();

    for _ in 0..RUNS {
        let case = random_case(&mut rng, 0.25);
        let matrix = case.matrix();

        let Ok(assignment) = solve(&strategy, &matrix, &case.slots) else {
            continue;
        };

        for group in group_contiguous_slots(case.slots.get_slots()) {
            let whole_group_fits =
                (0..matrix.number_of_courts()).any(|court_index| group.get_slot_indices().iter().all(|slot_index| matrix.is_free(court_index, *slot_index)));

            let courts: HashSet<CourtId> =
                group.get_slot_indices().iter().map(|index| assignment.court_for(case.slots.get_slots()[*index].id).unwrap()).collect();

            if whole_group_fits {
                assert_eq!(courts.len(), 1);
            }
        }
    }
}
