//! Level definitions: what a puzzle asks for and which buttons it offers.

mod core;
mod errors;

pub use errors::LevelError;
pub use self::core::Level;
