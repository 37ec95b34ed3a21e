use crate::config::EngineConfig;
use crate::domain::assignment::{
    assignment::Assignment, availability_matrix::build_availability_matrix, engine, strategy::strategy_trait::AssignmentStrategy,
};
use crate::domain::model::request::AssignmentRequest;
use crate::domain::repository::court_repository_trait::CourtRepository;
use crate::error::{Error, Result};

/// Entry point used by the booking workflow.
///
/// Holds no per-request state; every call builds its own matrix from a fresh repository snapshot.
#[derive(Debug)]
pub struct CourtAssignmentService<R: CourtRepository> {
    repository: R,
    strategy: Box<dyn AssignmentStrategy>,
}

impl<R: CourtRepository> CourtAssignmentService<R> {
    pub fn new(repository: R, strategy: Box<dyn AssignmentStrategy>) -> Self {
        CourtAssignmentService { repository, strategy }
    }

    pub fn from_config(repository: R, config: &EngineConfig) -> Self {
        Self::new(repository, config.strategy.get_instance())
    }

    pub fn get_repository(&self) -> &R {
        &self.repository
    }

    pub fn get_strategy_name(&self) -> &'static str {
        self.strategy.get_name()
    }

    pub fn assign(&self, request: &AssignmentRequest) -> Result<Assignment> {
        let matrix = match build_availability_matrix(&self.repository, request) {
            Ok(matrix) => matrix,
            Err(error) => {
                self.log_failure(request, &error);
                return Err(error);
            }
        };

        log::debug!(
            "Facility {} category {} on {}: {} candidate courts for {} requested slots.",
            request.facility_id,
            request.category_id,
            request.date,
            matrix.number_of_courts(),
            matrix.number_of_slots()
        );

        match engine::solve(self.strategy.as_ref(), &matrix, &request.slots) {
            Ok(assignment) => {
                log::info!(
                    "Assigned {} slots at facility {} on {} to courts {:?} using {} strategy.",
                    assignment.len(),
                    request.facility_id,
                    request.date,
                    assignment.courts_used(),
                    self.strategy.get_name()
                );
                Ok(assignment)
            }
            Err(error) => {
                self.log_failure(request, &error);
                Err(error)
            }
        }
    }

    fn log_failure(&self, request: &AssignmentRequest, error: &Error) {
        match error {
            Error::NoCandidateCourts { .. } | Error::InsufficientCapacity => {
                log::warn!("Assignment rejected for facility {} on {}: {}", request.facility_id, request.date, error)
            }
            _ => log::error!("Assignment failed for facility {} on {}: {}", request.facility_id, request.date, error),
        }
    }
}
