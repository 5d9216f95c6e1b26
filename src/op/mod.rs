//! Button tokens and the numeric transforms they stand for.

mod apply;
mod display;
mod errors;
mod kinds;
mod parse;

pub use errors::OpError;
pub use kinds::Op;
