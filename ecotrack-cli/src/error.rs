#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("activity rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
