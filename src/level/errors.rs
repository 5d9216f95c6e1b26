use thiserror::Error;

use crate::op::OpError;

/// Errors from validating a level definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level index must be a positive integer")]
    InvalidIndex,
    #[error("Move budget must be a positive integer")]
    InvalidMoves,
    #[error("A level needs at least one button")]
    NoButtons,
    #[error("{0} buttons exceed the one-digit-per-button limit of 10")]
    TooManyButtons(usize),
    #[error("Button {0:?} appears more than once")]
    DuplicateButton(String),
    #[error("Button {token:?} does not resolve to an operation")]
    UnresolvableButton {
        token: String,
        #[source]
        source: OpError,
    },
}
