pub mod config_dto;
pub mod request_dto;
pub mod snapshot_dto;
