//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// CityId validation error
    #[error("CityId cannot be empty")]
    CityIdEmpty,

    /// CityId too long error
    #[error("CityId cannot exceed {max} characters (got {actual})")]
    CityIdTooLong { max: usize, actual: usize },
}

/// Errors surfaced by the weather store boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store cannot be reached
    #[error("Weather store is unavailable: {0}")]
    Unavailable(String),

    /// Stored item cannot be read back as a weather record
    #[error("Stored item for city '{city_id}' is malformed: {reason}")]
    MalformedItem { city_id: String, reason: String },
}
