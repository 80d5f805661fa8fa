use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
