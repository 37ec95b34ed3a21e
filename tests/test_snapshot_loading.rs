mod common;

use common::data_path;
use court_slot_engine::api::request_dto::{AssignmentRequestDto, AssignmentResponseDto, SlotAssignmentDto};
use court_slot_engine::domain::assignment::strategy::strategy_type::AssignmentStrategyType;
use court_slot_engine::error::ConversionError;
use court_slot_engine::loader::parser::parse_json_file;
use court_slot_engine::loader::snapshot::FacilitySnapshot;
use court_slot_engine::{CourtAssignmentService, EngineConfig, Error};

fn load(request_file: &str) -> (FacilitySnapshot, AssignmentRequestDto) {
    let snapshot = FacilitySnapshot::from_file(&data_path("facility_snapshot.json")).unwrap();
    let request: AssignmentRequestDto = parse_json_file(&data_path(request_file)).unwrap();
    (snapshot, request)
}

#[test]
fn test_request_from_files_is_assigned() {
    let (snapshot, request_dto) = load("request_two_groups.json");
    let config = EngineConfig::from_file(&data_path("engine_config.json")).unwrap();
    assert_eq!(config.strategy, AssignmentStrategyType::Greedy);

    let request = snapshot.resolve_request(&request_dto).unwrap();
    let service = CourtAssignmentService::from_config(snapshot.repository.clone(), &config);
    let result = service.assign(&request);

    let response = AssignmentResponseDto::from(&result);

    assert_eq!(
        response,
        AssignmentResponseDto {
            assigned: true,
            assignments: vec![
                SlotAssignmentDto { time_slot_id: 14, court_id: 1 },
                SlotAssignmentDto { time_slot_id: 9, court_id: 2 },
                SlotAssignmentDto { time_slot_id: 10, court_id: 2 },
            ],
            reason: None,
        }
    );
}

#[test]
fn test_rejected_response_has_no_assignments() {
    let (snapshot, request_dto) = load("request_two_groups.json");
    let request = snapshot.resolve_request(&request_dto).unwrap();
    let service = CourtAssignmentService::from_config(snapshot.repository.clone(), &EngineConfig::default());

    // Two assignments from the same snapshot, both committed: no court is left at 09:00
    for assignment in [service.assign(&request).unwrap(), service.assign(&request).unwrap()] {
        snapshot.repository.commit_assignment(&assignment, request.date).unwrap();
    }

    let result = service.assign(&request);
    let json = serde_json::to_value(AssignmentResponseDto::from(&result)).unwrap();

    assert_eq!(json, serde_json::json!({ "assigned": false, "assignments": [], "reason": "InsufficientCapacity" }));
}

#[test]
fn test_unknown_slot_in_request_is_rejected() {
    let (snapshot, request_dto) = load("request_unknown_slot.json");

    assert!(matches!(snapshot.resolve_request(&request_dto), Err(Error::Conversion(ConversionError::UnknownTimeSlot(42)))));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(FacilitySnapshot::from_file(&data_path("missing.json")), Err(Error::IoError(_))));
}
