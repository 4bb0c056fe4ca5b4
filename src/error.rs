//! Error taxonomy shared by the engine, the collaborators and the API boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Route unavailable: {0}")]
    RouteUnavailable(String),
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PlanError {
    /// True for errors caused by the caller's request rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlanError::InvalidInput(_) | PlanError::MissingFields(_))
    }
}
