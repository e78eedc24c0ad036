#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
    #[error("Rule already registered: {0}")]
    DuplicateRule(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
