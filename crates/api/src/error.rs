#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid qualified name '{name}': {reason}")]
    InvalidQualifiedName { name: String, reason: &'static str },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
