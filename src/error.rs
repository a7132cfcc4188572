use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("unknown deployment: {0}")]
    UnknownDeployment(String),

    #[error("unknown packaging target: {0}")]
    UnknownTarget(String),

    #[error("invalid global binding name: {0:?}")]
    InvalidGlobalName(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
