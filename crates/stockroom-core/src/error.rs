use thiserror::Error;

/// Top-level error type for Stockroom.
///
/// Rendering is infallible; these variants cover the edges of the system
/// where configuration, datasets and sockets are touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StockroomError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for StockroomError {
    fn from(err: toml::de::Error) -> Self {
        StockroomError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StockroomError {
    fn from(err: toml::ser::Error) -> Self {
        StockroomError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for StockroomError {
    fn from(err: serde_json::Error) -> Self {
        StockroomError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Stockroom operations.
pub type Result<T> = std::result::Result<T, StockroomError>;
