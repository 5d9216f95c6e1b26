//! Calculator state machine replaying button presses against a level.

mod core;
mod errors;

pub use errors::CalculatorError;
pub use self::core::Calculator;
