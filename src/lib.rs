//! Buttonmash - A brute-force solver for Calculator: The Game style levels
//!
//! A level hands the player a broken calculator: a start value, a goal, a
//! move budget, and a row of buttons such as `+2`, `x3`, `<<`, `12=>3` or
//! `Reverse`. This library enumerates every button sequence of the budget's
//! length with a mixed-radix counter and returns the first sequence, in
//! counting order, that lands exactly on the goal.

pub mod calculator;
pub mod counter;
pub mod level;
pub mod op;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use calculator::{Calculator, CalculatorError};
pub use counter::{Candidates, Counter, CounterError, OverflowPolicy};
pub use level::{Level, LevelError};
pub use op::{Op, OpError};
pub use solver::{Solution, Solver, SolverError};

/// Find the first button sequence that solves the given level.
///
/// This is a convenience function that creates a default solver and runs
/// the full search.
///
/// # Arguments
///
/// * `level` - A validated level definition
///
/// # Returns
///
/// * `Ok(Some(Solution))` - The first solving sequence in counting order
/// * `Ok(None)` - The whole sequence space was enumerated without a hit
/// * `Err(SolverError)` - The level cannot drive a search
///
/// # Errors
///
/// This function will return an error if:
/// * The level carries fewer than 2 buttons, which no counter base can
///   encode
/// * A level invariant breaks mid-search
///
/// # Examples
///
/// ```
/// use buttonmash::{Level, solve_level};
///
/// // Reach 8 from 0 in three presses of +2 and +3
/// let level = Level::new(2, 3, 8, 0, ["+2", "+3"])?;
/// let solution = solve_level(&level)?.expect("level 2 is solvable");
/// assert_eq!(solution.to_string(), "+2 => +3 => +3");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve_level(level: &Level) -> Result<Option<Solution>, SolverError> {
    let solver = Solver::new();
    solver.solve(level)
}
