use thiserror::Error;

/// Errors raised while building an expression tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Sequence needs at least 2 children, got {len}")]
    InvalidStructure { len: usize },
}
