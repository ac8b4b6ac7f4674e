use models::validation::ValidationErrors;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the booking and CRUD services
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("movie not found")]
    MovieNotFound,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Db(#[from] DbErr),
}
