//! Server-side error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
