pub mod assignment;
pub mod model;
pub mod repository;
pub mod utils;
