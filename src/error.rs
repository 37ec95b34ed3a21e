use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to convert input into the domain model: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Court repository failed: {0}")]
    Repository(String),

    #[error("Invalid booking request: {0}")]
    InvalidRequest(String),

    /// The facility has no court of the requested category.
    #[error("No courts of category {category} exist at facility {facility}")]
    NoCandidateCourts { facility: String, category: String },

    /// At least one requested slot could not be placed on any court.
    #[error("Not enough courts available for the selected time slots")]
    InsufficientCapacity,

    #[error("Solver placement does not match the availability matrix: {0}")]
    InconsistentPlacement(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown assignment strategy type: {0}")]
    UnknownStrategyType(String),

    #[error("Unknown booking status: {0}")]
    UnknownBookingStatus(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Time slot {id} starts at {start} but ends at {end}")]
    InvalidTimeSlot { id: u64, start: String, end: String },

    #[error("Request references unknown time slot {0}")]
    UnknownTimeSlot(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
