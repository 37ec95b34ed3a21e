use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySnapshotDto {
    pub facility_id: u64,
    pub courts: Vec<CourtDto>,
    pub time_slots: Vec<TimeSlotDto>,
    #[serde(default)]
    pub bookings: Vec<BookingDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtDto {
    pub id: u64,
    pub category_id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDto {
    pub id: u64,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub court_id: u64,
    pub time_slot_id: u64,
    pub date: String,
    pub status: String,
}
