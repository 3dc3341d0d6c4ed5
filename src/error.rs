//! Error type for rendering and decoding.

use thiserror::Error;

/// Failures surfaced by the formatter. All are deterministic functions of
/// the input; nothing here is transient or retryable.
#[derive(Debug, Error)]
pub enum ExprError {
    /// A condition position received a node that is neither an empty
    /// condition, an operator application, nor raw SQL. The payload is the
    /// offending node rendered as JSON for diagnostics.
    #[error("illegal node in condition position: {0}")]
    InvalidExpression(String),

    /// `decode` was asked to parse a non-integer string as an integer type.
    #[error("invalid integer literal: {0}")]
    InvalidInt(#[from] std::num::ParseIntError),

    /// `decode` was asked to parse a non-numeric string as a floating type.
    #[error("invalid numeric literal: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),
}
