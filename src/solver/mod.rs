mod core;
mod errors;
mod solution;

pub use errors::SolverError;
pub use self::core::Solver;
pub use solution::Solution;
