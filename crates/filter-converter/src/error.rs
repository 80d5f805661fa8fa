use filter_model::Operator;
use std::fmt;
use thiserror::Error;

/// Where in the tree an operator was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorPosition {
    Comparison,
    Logical,
}

impl fmt::Display for OperatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorPosition::Comparison => f.write_str("comparison"),
            OperatorPosition::Logical => f.write_str("logical expression"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The tree and the converter disagree about which operators may appear
    /// where. Never recovered locally.
    #[error("Unsupported operator {operator} in {position}")]
    UnsupportedOperator {
        operator: Operator,
        position: OperatorPosition,
    },

    #[error("Expression nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Failed to deserialize the filter expression: {0}")]
    InvalidExpression(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
