use agency_core::{LookupError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("booking form has {} invalid field(s)", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("a booking submission is already in flight")]
    SubmissionPending,
    #[error("booking session has been closed")]
    SessionClosed,
}
