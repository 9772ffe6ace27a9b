use thiserror::Error;

/// Errors from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("unknown collection: {0}")]
    InvalidCollection(String),

    #[error("invalid field name: {0}")]
    InvalidField(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
