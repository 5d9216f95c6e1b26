use thiserror::Error;

/// Errors from constructing or querying a counter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Base {0} is outside the supported range 2..=10")]
    InvalidBase(u8),
    #[error("A counter needs at least one digit")]
    EmptyDigits,
    #[error("Digit {digit} does not fit base {base}")]
    DigitOutOfRange { digit: u8, base: u8 },
    #[error("Minimum and maximum are only defined for counters that grow on overflow")]
    BoundsUnavailable,
}
