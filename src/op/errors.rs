use thiserror::Error;

/// Errors from resolving a button token into an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("Unrecognized operation token: {0:?}")]
    UnknownToken(String),
    #[error("Division by zero")]
    DivisionByZero,
}
