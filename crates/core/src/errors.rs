use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Requested time slot is not offered for this service and date")]
    SlotNotOffered,

    #[error("Requested time slot conflicts with an existing appointment")]
    SlotConflict,

    #[error("Service is no longer available: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
