use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reads the JSON file at `file_path` and deserializes it into `T`.
///
/// An unreadable file surfaces as `Error::IoError`, malformed JSON or a shape mismatch as
/// `Error::DeserializationError`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let file_path = file_path.as_ref();
    log::debug!("Reading JSON input from '{}'.", file_path.display());

    let data = fs::read_to_string(file_path)?;
    parse_json_str(&data)
}

pub fn parse_json_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request_dto::AssignmentRequestDto;
    use crate::error::Error;

    #[test]
    fn test_parse_request_json() {
        let dto: AssignmentRequestDto = parse_json_str(r#"{ "facilityId": 3, "categoryId": 1, "date": "2025-01-02", "timeSlotIds": [4, 5] }"#).unwrap();

        assert_eq!(dto.facility_id, 3);
        assert_eq!(dto.time_slot_ids, vec![4, 5]);
    }

    #[test]
    fn test_shape_mismatch_is_deserialization_error() {
        let result: Result<AssignmentRequestDto> = parse_json_str(r#"{ "facilityId": "three" }"#);

        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }
}
