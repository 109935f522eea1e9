use thiserror::Error;

pub mod db_error;
pub mod validation_error;

pub use db_error::DbError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// The request targeted a record that doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::PlayerNotFound(_)))
    }

    /// The request itself was malformed or out of bounds.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApplicationError::Validation(_))
    }
}

impl From<roster_types::UnknownVariant> for ApplicationError {
    fn from(err: roster_types::UnknownVariant) -> Self {
        ApplicationError::Validation(err.into())
    }
}
