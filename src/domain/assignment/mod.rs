pub mod assignment;
pub mod availability_matrix;
pub mod engine;
pub mod result_mapper;
pub mod service;
pub mod slot_grouper;
pub mod strategy;
