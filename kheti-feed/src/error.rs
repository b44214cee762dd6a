//! Erros da camada de coleta

use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

/// Erros de coleta e decodificação de feeds
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed for '{url}': {message}")]
    Http { url: String, message: String },

    #[error("HTTP status {status} from '{url}'")]
    Status { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] kheti_core::CoreError),
}
