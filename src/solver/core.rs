use log::info;

use crate::calculator::Calculator;
use crate::counter::Candidates;
use crate::level::Level;
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;

#[inline]
fn has_fraction(value: f64) -> bool {
    value.fract() != 0.0
}

/// Exhaustive search over a level's button sequences.
pub struct Solver {}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find the first button sequence, in counting order, that turns the
    /// level's start value into its goal in exactly `moves` presses.
    ///
    /// Every candidate replays on a freshly reset calculator. A fractional
    /// intermediate value abandons the candidate on the spot; the goal is
    /// only checked after the full sequence, so passing through the goal
    /// mid-sequence does not count. `Ok(None)` means the whole
    /// `buttons^moves` space was enumerated without a hit.
    ///
    /// # Errors
    ///
    /// `SolverError::Counter` when the button row cannot drive a counter
    /// (fewer than 2 or more than 10 buttons); `SolverError::Calculator`
    /// and `SolverError::ButtonIndexOutOfRange` surface broken level
    /// invariants mid-search.
    pub fn solve(&self, level: &Level) -> Result<Option<Solution>, SolverError> {
        let width = level.moves() as usize;
        let base = level.buttons().len() as u8;
        info!(
            "Solving level {}: {} -> {} in {} moves over {} buttons",
            level.index(),
            level.start(),
            level.goal(),
            level.moves(),
            base
        );

        let mut calculator = Calculator::new(level);
        let mut tried: u64 = 0;

        for digits in Candidates::new(width, base)? {
            tried += 1;
            if self.replay(&mut calculator, &digits)? {
                let solution = Solution::new(decode(level, &digits)?);
                info!(
                    "Solved level {} after {} candidates: {}",
                    level.index(),
                    tried,
                    solution
                );
                return Ok(Some(solution));
            }
        }

        info!(
            "Exhausted {} candidates on level {} without reaching the goal",
            tried,
            level.index()
        );
        Ok(None)
    }

    /// Replay one candidate digit string; `true` when it lands on the goal.
    fn replay(
        &self,
        calculator: &mut Calculator<'_>,
        digits: &[u8],
    ) -> Result<bool, SolverError> {
        calculator.reset();
        let level = calculator.level();

        for &digit in digits {
            let token = button_for(level, digit)?;
            calculator.apply(token)?;
            if has_fraction(calculator.current_value()) {
                return Ok(false);
            }
        }

        Ok(calculator.current_value() == level.goal() as f64)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

fn button_for(level: &Level, digit: u8) -> Result<&str, SolverError> {
    level
        .button_at(digit as usize)
        .ok_or(SolverError::ButtonIndexOutOfRange {
            digit,
            buttons: level.buttons().len(),
        })
}

fn decode(level: &Level, digits: &[u8]) -> Result<Vec<String>, SolverError> {
    digits
        .iter()
        .map(|&digit| button_for(level, digit).map(str::to_string))
        .collect()
}
