//! Error types for expression evaluation.

use crate::access::DataType;
use thiserror::Error;

/// Errors that can occur while evaluating an expression against a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// Column holds a value of the wrong type
    #[error("Type mismatch in {context}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: DataType,
        actual: Option<DataType>,
        context: String,
    },

    /// Column index out of bounds
    #[error("Column index {index} out of bounds for record with {column_count} columns")]
    ColumnIndexOutOfBounds { index: usize, column_count: usize },

    /// Generic evaluation error raised by an upstream function
    #[error("Expression evaluation error: {message}")]
    EvaluationError { message: String },
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;
