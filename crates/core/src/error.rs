use thiserror::Error;

pub type GasExpressResult<T> = Result<T, GasExpressError>;

#[derive(Error, Debug)]
pub enum GasExpressError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Contact configuration error: {0}")]
    Contact(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
