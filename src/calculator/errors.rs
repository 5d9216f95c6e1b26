use thiserror::Error;

use crate::op::OpError;

/// Errors from replaying button presses on a calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Button {token:?} failed to resolve during replay")]
    UnresolvableButton {
        token: String,
        #[source]
        source: OpError,
    },
}
