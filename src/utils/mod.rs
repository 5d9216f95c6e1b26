//! Sign and digit-text helpers shared by the digit-manipulation operations.

mod digits;

pub use digits::{attach_sign, split_digits};
