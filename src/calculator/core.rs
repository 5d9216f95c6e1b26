use log::debug;

use crate::calculator::errors::CalculatorError;
use crate::level::Level;
use crate::op::Op;

/// The puzzle's calculator: one numeric register replayed against a level.
///
/// The search resets it before every candidate, so each trial starts from
/// the level's start value with no history. `previous_value` holds the
/// register as it was before the latest press, for diagnostics only.
#[derive(Debug, Clone)]
pub struct Calculator<'a> {
    level: &'a Level,
    current_value: f64,
    previous_value: f64,
}

impl<'a> Calculator<'a> {
    pub fn new(level: &'a Level) -> Self {
        let start = level.start() as f64;
        Self {
            level,
            current_value: start,
            previous_value: start,
        }
    }

    /// Back to the level's start value, forgetting all history.
    pub fn reset(&mut self) {
        self.current_value = self.level.start() as f64;
        self.previous_value = self.current_value;
    }

    /// Resolve one button token and apply it to the register.
    ///
    /// # Errors
    ///
    /// `CalculatorError::UnresolvableButton` when the token does not
    /// resolve; the register is left untouched. Buttons of a validated
    /// [`Level`] always resolve, so hitting this during a solve means a
    /// broken invariant rather than bad puzzle input.
    pub fn apply(&mut self, token: &str) -> Result<(), CalculatorError> {
        let op = Op::resolve(token).map_err(|source| CalculatorError::UnresolvableButton {
            token: token.to_string(),
            source,
        })?;

        self.previous_value = self.current_value;
        self.current_value = op.apply(self.current_value);
        debug!(
            "Applied {:?}: {} -> {}",
            token, self.previous_value, self.current_value
        );
        Ok(())
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn previous_value(&self) -> f64 {
        self.previous_value
    }

    pub fn level(&self) -> &'a Level {
        self.level
    }
}
