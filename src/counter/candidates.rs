use crate::counter::core::{Counter, OverflowPolicy};
use crate::counter::errors::CounterError;

/// Iterator over every digit string of a fixed width, in counting order.
///
/// Yields `base.pow(width)` items, the all-zero string first and the
/// all-`base - 1` string last, each exactly once. Built on a saturating
/// [`Counter`]: the fixed point marks the last item, a `done` flag keeps
/// the iterator fused afterwards.
#[derive(Debug, Clone)]
pub struct Candidates {
    counter: Counter,
    done: bool,
}

impl Candidates {
    /// # Errors
    ///
    /// Same constraints as [`Counter::new`]: at least one digit of width
    /// and a base in `2..=10`.
    pub fn new(width: usize, base: u8) -> Result<Self, CounterError> {
        Ok(Self {
            counter: Counter::new(width, base, OverflowPolicy::Saturate)?,
            done: false,
        })
    }
}

impl Iterator for Candidates {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.counter.digits().to_vec();
        if self.counter.is_saturated() {
            self.done = true;
        } else {
            self.counter.increment();
        }
        Some(current)
    }
}
