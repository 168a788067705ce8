use thiserror::Error;

use crate::models::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown destination code `{0}`")]
    UnknownDestination(String),
    #[error("traveler count {0} is outside the bookable range 1..=6")]
    TravelerCountOutOfRange(u32),
}

impl LookupError {
    pub fn field(&self) -> FormField {
        match self {
            Self::UnknownDestination(_) => FormField::Destination,
            Self::TravelerCountOutOfRange(_) => FormField::Travelers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail => FormField::Email,
            Self::Lookup(err) => err.field(),
        }
    }
}
