// Provider Error Types

use subfeed_providers::ClientError;

/// Adapter-level errors
///
/// Transient transport and API failures surface here and are retryable by
/// the orchestrator's caller; a genuine not-found is expressed as
/// `Ok(None)` on `resolve_channel`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ClientError> for ProviderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(msg) => Self::Network(msg),
            ClientError::Http { status, url } => Self::Api(format!("HTTP {status} for {url}")),
            ClientError::Parse(msg) => Self::Parse(msg),
            ClientError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            other @ ClientError::ResponseTooLarge { .. } => Self::Api(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
