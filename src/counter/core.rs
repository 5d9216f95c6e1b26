use std::fmt;

use crate::counter::errors::CounterError;

/// Smallest base a counter can count in.
pub const MIN_BASE: u8 = 2;

/// Largest base a counter can count in; one decimal character per digit.
pub const MAX_BASE: u8 = 10;

/// What an increment does once a carry survives the most-significant digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Widen the counter by one new leading digit holding the carry.
    Grow,
    /// Discard the increment and pin every digit at `base - 1`. The counter
    /// becomes a fixed point: further increments change nothing.
    Saturate,
}

/// A fixed-width number in base `2..=10`, one digit per `u8`, stored
/// most-significant first.
///
/// Width never changes under [`OverflowPolicy::Saturate`]; under
/// [`OverflowPolicy::Grow`] it grows by exactly one digit on the overflowing
/// increment and never shrinks. Equality is structural: counters of
/// different widths are never equal, even when numerically equivalent,
/// because leading zeros are significant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    digits: Vec<u8>,
    base: u8,
    policy: OverflowPolicy,
}

impl Counter {
    /// All-zero counter of the given width.
    ///
    /// # Errors
    ///
    /// `CounterError::EmptyDigits` for a zero width and
    /// `CounterError::InvalidBase` for a base outside `2..=10`.
    pub fn new(width: usize, base: u8, policy: OverflowPolicy) -> Result<Self, CounterError> {
        Self::from_digits(&vec![0; width], base, policy)
    }

    /// Counter starting at an arbitrary digit string.
    ///
    /// # Errors
    ///
    /// Rejects an empty digit string, a base outside `2..=10`, and any
    /// digit not below the base.
    pub fn from_digits(
        digits: &[u8],
        base: u8,
        policy: OverflowPolicy,
    ) -> Result<Self, CounterError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(CounterError::InvalidBase(base));
        }
        if digits.is_empty() {
            return Err(CounterError::EmptyDigits);
        }
        if let Some(&digit) = digits.iter().find(|&&digit| digit >= base) {
            return Err(CounterError::DigitOutOfRange { digit, base });
        }

        Ok(Self {
            digits: digits.to_vec(),
            base,
            policy,
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Add one, carrying right to left.
    ///
    /// A carry that survives the most-significant digit is settled by the
    /// overflow policy: [`OverflowPolicy::Grow`] prepends it as one new
    /// leading digit, [`OverflowPolicy::Saturate`] discards the increment
    /// and pins every digit at `base - 1`.
    pub fn increment(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.base {
                return;
            }
            *digit -= self.base;
        }

        match self.policy {
            OverflowPolicy::Grow => self.digits.insert(0, 1),
            OverflowPolicy::Saturate => self.digits.fill(self.base - 1),
        }
    }

    /// Fixed-point test: `true` once a saturating counter holds `base - 1`
    /// in every digit. Never `true` under [`OverflowPolicy::Grow`].
    pub fn is_saturated(&self) -> bool {
        self.policy == OverflowPolicy::Saturate
            && self.digits.iter().all(|&digit| digit == self.base - 1)
    }

    /// All-zero digit string at the current width.
    ///
    /// # Errors
    ///
    /// `CounterError::BoundsUnavailable` unless the policy is
    /// [`OverflowPolicy::Grow`].
    pub fn minimum_value(&self) -> Result<String, CounterError> {
        match self.policy {
            OverflowPolicy::Grow => Ok("0".repeat(self.width())),
            OverflowPolicy::Saturate => Err(CounterError::BoundsUnavailable),
        }
    }

    /// All-`base - 1` digit string at the current width.
    ///
    /// # Errors
    ///
    /// `CounterError::BoundsUnavailable` unless the policy is
    /// [`OverflowPolicy::Grow`].
    pub fn maximum_value(&self) -> Result<String, CounterError> {
        match self.policy {
            OverflowPolicy::Grow => {
                let digit = (b'0' + self.base - 1) as char;
                Ok(digit.to_string().repeat(self.width()))
            }
            OverflowPolicy::Saturate => Err(CounterError::BoundsUnavailable),
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
