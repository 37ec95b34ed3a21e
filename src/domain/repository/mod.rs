pub mod court_repository_trait;
pub mod in_memory;
