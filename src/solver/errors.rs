use thiserror::Error;

use crate::calculator::CalculatorError;
use crate::counter::CounterError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Counter error: {0}")]
    Counter(#[from] CounterError),
    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),
    #[error("Digit {digit} selects no button in a row of {buttons}")]
    ButtonIndexOutOfRange { digit: u8, buttons: usize },
}
