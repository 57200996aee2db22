use reqwest::StatusCode;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VonatError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("schema script error: {0}")]
    SchemaIo(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("creation time parse error: {0}")]
    CreationTime(#[from] chrono::ParseError),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}
