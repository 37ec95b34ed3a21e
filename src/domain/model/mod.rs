pub mod booking;
pub mod court;
pub mod request;
pub mod time_slot;
