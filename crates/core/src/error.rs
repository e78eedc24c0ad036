use lintscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Analysis cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, LintscopeError>;
