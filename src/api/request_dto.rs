use serde::{Deserialize, Serialize};

use crate::domain::assignment::assignment::Assignment;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequestDto {
    pub facility_id: u64,
    pub category_id: u64,
    pub date: String,
    pub time_slot_ids: Vec<u64>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignmentDto {
    pub time_slot_id: u64,
    pub court_id: u64,
}

/// Answer handed back to the booking workflow. A rejected request carries no assignments.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponseDto {
    pub assigned: bool,
    pub assignments: Vec<SlotAssignmentDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&Result<Assignment>> for AssignmentResponseDto {
    fn from(result: &Result<Assignment>) -> Self {
        match result {
            Ok(assignment) => AssignmentResponseDto {
                assigned: true,
                assignments: assignment
                    .iter()
                    .map(|(slot_id, court_id)| SlotAssignmentDto { time_slot_id: slot_id.value, court_id: court_id.value })
                    .collect(),
                reason: None,
            },
            Err(error) => AssignmentResponseDto { assigned: false, assignments: Vec::new(), reason: Some(reason_of(error)) },
        }
    }
}

fn reason_of(error: &Error) -> String {
    match error {
        Error::NoCandidateCourts { .. } => "NoCandidateCourts".to_string(),
        Error::InsufficientCapacity => "InsufficientCapacity".to_string(),
        Error::InvalidRequest(_) | Error::Conversion(_) => "InvalidRequest".to_string(),
        other => other.to_string(),
    }
}
