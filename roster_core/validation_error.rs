use thiserror::Error;

use roster_types::UnknownVariant;

/// Errors for malformed or out-of-range input. Always the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Player ID must be a positive integer")]
    InvalidId,

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Name must be between 1 and 12 characters")]
    NameLength,

    #[error("Title must be between 1 and 30 characters")]
    TitleLength,

    #[error("Experience {0} is outside 0..=10000000")]
    ExperienceOutOfRange(i64),

    #[error("Birthday year {0} is outside 2000..=3000")]
    BirthdayOutOfRange(i32),

    #[error("Page number must be >= 0 and page size >= 1")]
    InvalidPagination,

    #[error("Page size {0} exceeds the allowed maximum")]
    PageSizeTooLarge(u32),

    #[error(transparent)]
    UnknownValue(#[from] UnknownVariant),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}
