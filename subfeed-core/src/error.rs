use thiserror::Error;

use crate::models::{Capability, Provider};
use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Channel {id_in_provider} not found in {provider}")]
    ChannelNotFound {
        provider: Provider,
        id_in_provider: String,
    },

    #[error("Provider {provider} does not support {capability}")]
    UnsupportedCapability {
        provider: Provider,
        capability: Capability,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Errors the caller may retry: transient provider/network failures.
    /// Not-found and capability errors are terminal for the request.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::Database(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        // Map "no rows" to NotFound
        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound("Resource not found".to_string());
        }
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                // PostgreSQL unique_violation
                Some("23505") => {
                    return Self::AlreadyExists("Resource already exists".to_string());
                }
                // PostgreSQL foreign_key_violation
                Some("23503") => {
                    return Self::NotFound("Referenced resource not found".to_string());
                }
                _ => {}
            }
        }
        Self::Database(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
