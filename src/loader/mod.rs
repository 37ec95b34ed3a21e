pub mod parser;
pub mod snapshot;
