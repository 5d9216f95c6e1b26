//! Mixed-radix counter and the candidate enumeration built on top of it.

mod candidates;
mod core;
mod errors;

pub use candidates::Candidates;
pub use errors::CounterError;
pub use self::core::{Counter, MAX_BASE, MIN_BASE, OverflowPolicy};

#[cfg(test)]
mod tests;
