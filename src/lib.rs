//! Court-slot assignment for a sports-facility booking platform.
//!
//! Given a booking request for one or more time slots on a date, [`CourtAssignmentService`] picks a court
//! for every slot, keeping back-to-back slots on the same court whenever one is free for the whole run.
//!
//! The engine is synchronous and keeps no state between calls. It reads the repository once per call and
//! trusts that snapshot: callers must serialize "read availability, assign, commit" per facility and date.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

pub use crate::config::EngineConfig;
pub use crate::domain::assignment::assignment::Assignment;
pub use crate::domain::assignment::service::CourtAssignmentService;
pub use crate::error::{Error, Result};
