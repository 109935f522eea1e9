use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Player with ID {0} not found")]
    PlayerNotFound(i64),

    #[error("{0} must be set")]
    MissingDatabaseUrl(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
